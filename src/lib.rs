//! gqlvars - GraphQL variables type checker for React hook calls
//!
//! gqlvars checks that calls like `useQuery<FooQuery>(...)` also pass the
//! generated `FooQueryVariables` type whenever the file the result type is
//! imported from declares one.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (scan, parse, resolve)
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: The missing-graphql-variables-type rule

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
