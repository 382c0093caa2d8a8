#![no_main]
use libfuzzer_sys::fuzz_target;

use mcp_rental_front::view::router::Route;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let route = Route::parse(path);
        let _ = route.path();
    }
});
