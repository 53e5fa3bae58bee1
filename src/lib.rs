//! # Calc Engine
//!
//! The arithmetic core of a calculator widget: decimal-safe evaluation over
//! two operands, keypress gating, and a persisted calculation history with
//! a CSV codec.
//!
//! ## Design Principles
//!
//! - **Scaled-integer arithmetic**: operands are lifted to integers before
//!   the operator is applied, so short decimals combine without binary
//!   floating-point artifacts
//! - **Fail-soft data paths**: malformed history rows are dropped, invalid
//!   numeric operations propagate as `NaN`/`Infinity` text, nothing throws
//! - **No hidden globals**: the display length cap is an explicit parameter
//!   everywhere it matters
//!
//! ## Example
//!
//! ```
//! use calc_engine::{calculate_result, Operand, Operator, DEFAULT_MAX_INPUT_LENGTH};
//!
//! let a: Operand = "0.1".parse().unwrap();
//! let b: Operand = "0.2".parse().unwrap();
//! let result = calculate_result(&a, &b, Operator::Add, DEFAULT_MAX_INPUT_LENGTH);
//! assert_eq!(result, "0.3");
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod history;
pub mod operand;
pub mod operator;

pub use display::{button_info, input_width, ButtonInfo};
pub use engine::{
    calculate_result, evaluate, should_ignore_button_input, DEFAULT_MAX_INPUT_LENGTH,
};
pub use error::{CalcError, Result};
pub use history::{format_history_csv, parse_history_csv, HistoryItem, HISTORY_CSV_HEADER};
pub use operand::Operand;
pub use operator::Operator;
