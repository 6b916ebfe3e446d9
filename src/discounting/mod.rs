//! Discounting primitives
//!
//! Pure scalar functions of a rate, a period count and (optionally) a cash-flow
//! sequence:
//! - `value`: single-amount PV/FV, annuity FV, NPV
//! - `annuity`: PV of finite streams, ordinary and due, level and growing
//! - `perpetuity`: PV of infinite streams (undefined inputs return `None`)
//! - `rates`: closed-form rate inverses and periodic/annual conversion

pub mod annuity;
pub mod perpetuity;
pub mod rates;
pub mod value;

pub use annuity::{
    present_value_annuity, present_value_annuity_due, present_value_growing_annuity,
    present_value_growing_annuity_due, present_value_level_growing_annuity,
};
pub use perpetuity::{
    present_value_growing_perpetuity, present_value_growing_perpetuity_due,
    present_value_perpetuity, present_value_perpetuity_due,
};
pub use rates::{
    annualize_periodic_rate, interest_rate, interest_rate_annuity, interest_rate_annuity_due,
    interest_rate_continuous_compounding, interest_rate_growing_annuity,
    interest_rate_growing_annuity_due, interest_rate_growing_perpetuity,
    interest_rate_growing_perpetuity_due, interest_rate_perpetuity, interest_rate_perpetuity_due,
    periodic_from_annual_rate,
};
pub use value::{
    discount_factor, future_value, future_value_annuity, net_present_value, present_value,
};
