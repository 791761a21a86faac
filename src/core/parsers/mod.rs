//! Source file parsing.
//!
//! - `tsx`: TypeScript/TSX source file parser (uses swc for AST generation)

pub mod tsx;
