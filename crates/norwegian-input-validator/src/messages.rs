//! Default Norwegian error messages.
//!
//! Every builder accepts a custom message that replaces these.

/// The field is required but empty.
pub const REQUIRED: &str = "Må fylles ut";
/// Not a Norwegian phone number.
pub const PHONE_NUMBER: &str = "Ugyldig telefonnummer";
/// Not an e-mail address.
pub const EMAIL_ADDRESS: &str = "Ugyldig e-postadresse";
/// Text longer than allowed.
pub const MAX_LENGTH: &str = "Teksten er for lang";
/// Not a four digit postal number.
pub const POSTAL_NUMBER: &str = "Ugyldig postnummer";
/// Contains something other than digits.
pub const NUMBER: &str = "Må være tall";
/// Not a boolean.
pub const BOOLEAN: &str = "Må være ja eller nei";
/// Not a URL.
pub const URL: &str = "Ugyldig url";
/// Fewer than two words.
pub const AT_LEAST_TWO_WORDS: &str = "Må inneholde minst 2 ord";
/// Fewer than three words.
pub const AT_LEAST_THREE_WORDS: &str = "Må inneholde minst 3 ord";
/// Not a Norwegian organization number.
pub const ORG_NUMBER: &str = "Ugyldig organisasjonsnummer";
/// Not the allowed value.
pub const ALLOW: &str = "Ugyldig verdi";
