//! Numeric types behind the losing conditions

pub mod binomial;
pub mod nimber;
pub mod residue;
