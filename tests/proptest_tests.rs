#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use proptest::prelude::*;

use mcp_rental_front::domain::booking::{BookingField, BookingFormData};
use mcp_rental_front::domain::property::{Address, Property};
use mcp_rental_front::domain::review::{MAX_STARS, Review, ReviewUser, star_count};
use mcp_rental_front::view::pages::home::render_listing;
use mcp_rental_front::view::router::Route;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_property() -> impl Strategy<Value = Property> {
    (
        "[0-9]{1,6}",
        "[A-Za-z][A-Za-z ]{0,24}",
        0.0..5000.0_f64,
        0.0..5.0_f64,
        prop::option::of("https://img\\.example/[a-z]{1,8}\\.png"),
    )
        .prop_map(|(id, name, price, rating, image)| Property {
            id,
            name,
            address: Address {
                city: "Austin".into(),
                country: "US".into(),
            },
            price,
            rating,
            image,
            description: None,
        })
}

fn arb_field() -> impl Strategy<Value = BookingField> {
    prop::sample::select(
        BookingField::IDENTITY
            .iter()
            .chain(BookingField::PAYMENT.iter())
            .copied()
            .collect::<Vec<_>>(),
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn star_count_is_bounded(rating in any::<f64>()) {
        prop_assert!(star_count(rating) <= MAX_STARS);
    }

    #[test]
    fn star_count_is_whole_part_of_rating(rating in -1000.0..1000.0_f64) {
        let expected = usize::try_from(rating.trunc().max(0.0) as i64).unwrap();
        prop_assert_eq!(star_count(rating), expected.min(MAX_STARS));
    }

    #[test]
    fn stars_render_one_glyph_per_point(rating in -10_i64..=10) {
        let review = Review {
            id: "r".into(),
            user: ReviewUser { name: "Ann".into(), avatar: None },
            rating: rating as f64,
            comment: String::new(),
            date: "2025-01-01".into(),
        };
        prop_assert_eq!(review.stars().chars().count(), usize::try_from(rating.max(0)).unwrap());
    }

    #[test]
    fn listing_renders_one_card_per_property_in_order(
        properties in prop::collection::vec(arb_property(), 0..20)
    ) {
        let text = render_listing(&properties);
        prop_assert_eq!(text.matches("[View Details](").count(), properties.len());

        let mut cursor = 0;
        for property in &properties {
            let link = format!("[View Details]({})", property.detail_path());
            let found = text[cursor..].find(&link);
            prop_assert!(found.is_some(), "missing or out of order: {}", link);
            cursor += found.unwrap() + link.len();
        }
    }

    #[test]
    fn detail_path_parses_back_to_property_route(id in "[A-Za-z0-9_-]{1,12}") {
        let property = Property {
            id: id.clone(),
            name: "x".into(),
            address: Address { city: "c".into(), country: "k".into() },
            price: 1.0,
            rating: 1.0,
            image: None,
            description: None,
        };
        prop_assert_eq!(Route::parse(&property.detail_path()), Route::Property { id });
    }

    #[test]
    fn form_set_only_touches_named_field(field in arb_field(), value in "[ -~]{0,30}") {
        let mut form = BookingFormData::default();
        form.set(field, value.clone());
        prop_assert_eq!(form.get(field), value.as_str());
        for other in BookingField::IDENTITY.iter().chain(BookingField::PAYMENT.iter()) {
            if *other != field {
                prop_assert_eq!(form.get(*other), "");
            }
        }
    }

    #[test]
    fn field_names_round_trip(field in arb_field()) {
        prop_assert_eq!(field.name().parse::<BookingField>().ok(), Some(field));
    }
}
