//! Domain models for currency conversion.

pub mod code;
pub mod rate;
pub mod request;
pub mod result;

pub use code::CurrencyCode;
pub use rate::Rate;
pub use request::ConversionRequest;
pub use result::ConversionResult;
