//! Code generation for PageCraft documents.
//!
//! Two targets ship: a React/Tailwind page (`page.tsx`) and a Flutter
//! application bundle (`main.dart` plus support files in one artifact).
//! Generation is pure and total — the same document always yields the
//! same bytes, and every node kind emits something for every target.

pub mod flutter;
pub mod react;
pub mod target;
pub mod tokens;

pub use target::{GeneratedSource, Target, TargetKind, generate};
pub use tokens::{TokenList, resolve_tokens};
