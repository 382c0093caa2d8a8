#![no_main]
use libfuzzer_sys::fuzz_target;

use mcp_rental_front::adapters::rest::payload::{parse_properties, parse_property};
use mcp_rental_front::view::pages::home::render_listing;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        if let Ok(properties) = parse_properties(body) {
            let _ = render_listing(&properties);
        }
        let _ = parse_property(body);
    }
});
