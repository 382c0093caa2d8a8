use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// Body of `POST /api/bookings`. Every field is free text; only the email is
/// checked before submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub billing_address: String,
}

impl BookingFormData {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => &self.card_number,
            BookingField::ExpirationDate => &self.expiration_date,
            BookingField::Cvv => &self.cvv,
            BookingField::BillingAddress => &self.billing_address,
        }
    }

    /// Overwrites one field; the others keep their previous value.
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let slot = match field {
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::CardNumber => &mut self.card_number,
            BookingField::ExpirationDate => &mut self.expiration_date,
            BookingField::Cvv => &mut self.cvv,
            BookingField::BillingAddress => &mut self.billing_address,
        };
        *slot = value.into();
    }

    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    BillingAddress,
}

impl BookingField {
    pub const IDENTITY: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::BillingAddress,
    ];

    pub const PAYMENT: [Self; 3] = [Self::CardNumber, Self::ExpirationDate, Self::Cvv];

    /// Wire name, as sent in the request body.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::CardNumber => "cardNumber",
            Self::ExpirationDate => "expirationDate",
            Self::Cvv => "cvv",
            Self::BillingAddress => "billingAddress",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::CardNumber => "Card Number",
            Self::ExpirationDate => "MM/YY",
            Self::Cvv => "CVV",
            Self::BillingAddress => "Billing Address",
        }
    }
}

impl FromStr for BookingField {
    type Err = RentalError;

    /// Accepts the wire name (`cardNumber`) or its snake_case spelling (`card_number`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phonenumber" => Ok(Self::PhoneNumber),
            "cardnumber" => Ok(Self::CardNumber),
            "expirationdate" => Ok(Self::ExpirationDate),
            "cvv" => Ok(Self::Cvv),
            "billingaddress" => Ok(Self::BillingAddress),
            _ => Err(RentalError::UnknownField { name: s.to_string() }),
        }
    }
}

/// A 2xx answer from the booking endpoint. The body is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingAccepted {
    pub status: u16,
}

impl BookingAccepted {
    /// Only 200 and 201 count as a confirmed booking.
    pub fn is_confirmed(self) -> bool {
        matches!(self.status, 200 | 201)
    }
}
