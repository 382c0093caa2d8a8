#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data)
        && let Ok(reviews) = mcp_rental_front::adapters::rest::payload::parse_reviews(body)
    {
        for review in &reviews {
            let _ = review.stars();
            let _ = review.display_date();
        }
    }
});
