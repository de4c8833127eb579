//! Shipping details and payment choice entered at checkout.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum District {
    #[default]
    Dhaka,
    Chittagong,
    Sylhet,
}

impl District {
    pub const ALL: [District; 3] = [District::Dhaka, District::Chittagong, District::Sylhet];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::Dhaka => "Dhaka",
            District::Chittagong => "Chittagong",
            District::Sylhet => "Sylhet",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for District {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        District::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(CommerceError::CheckoutIncomplete("district"))
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Bkash,
    Nagad,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Bkash,
        PaymentMethod::Nagad,
        PaymentMethod::CashOnDelivery,
    ];

    /// Short code used in forms and scripts.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Bkash => "bkash",
            PaymentMethod::Nagad => "nagad",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Bkash => "BKASH",
            PaymentMethod::Nagad => "NAGAD",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Note shown under the option. The COD handling charge is informational
    /// and is not added to the order total.
    pub fn handling_note(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "+\u{09f3}50 Handling",
            _ => "Instant Confirmation",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s.trim()))
            .ok_or(CommerceError::CheckoutIncomplete("payment method"))
    }
}

/// Details collected on the checkout step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub district: District,
    pub address: String,
    #[serde(default)]
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.full_name.trim().is_empty() {
            return Err(CommerceError::CheckoutIncomplete("full name"));
        }
        if self.phone.trim().is_empty() {
            return Err(CommerceError::CheckoutIncomplete("phone number"));
        }
        if self.address.trim().is_empty() {
            return Err(CommerceError::CheckoutIncomplete("address"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CheckoutForm {
        CheckoutForm {
            full_name: "Rahim Uddin".into(),
            phone: "+880 1711 000000".into(),
            district: District::Sylhet,
            address: "House 4, Road 2, Zindabazar".into(),
            payment: PaymentMethod::Nagad,
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.phone = "   ".into();
        assert_eq!(
            form.validate(),
            Err(CommerceError::CheckoutIncomplete("phone number"))
        );

        let form = CheckoutForm::default();
        assert_eq!(
            form.validate(),
            Err(CommerceError::CheckoutIncomplete("full name"))
        );
    }

    #[test]
    fn test_defaults_match_storefront() {
        let form = CheckoutForm::default();
        assert_eq!(form.district, District::Dhaka);
        assert_eq!(form.payment, PaymentMethod::Bkash);
    }

    #[test]
    fn test_payment_parsing_and_notes() {
        assert_eq!("COD".parse::<PaymentMethod>().unwrap(), PaymentMethod::CashOnDelivery);
        assert_eq!(PaymentMethod::CashOnDelivery.handling_note(), "+\u{09f3}50 Handling");
        assert_eq!(PaymentMethod::Bkash.handling_note(), "Instant Confirmation");
        assert!("visa".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_serde_codes() {
        let json = serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(json, "\"cod\"");
    }
}
