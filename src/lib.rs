//! Msgcat - localization build pipeline for XML message catalogs
//!
//! Msgcat converts a canonical message catalog (diagnostic messages with an
//! identifier, explanation and operator response, each carrying limited inline
//! markup) into the derived artifacts consumed by documentation tooling,
//! runtime bundles and QA: DITA topics, a TOC, resource bundles, HTML
//! listings and pseudo-translated copies. It also wraps two external
//! conversion tools and checks translation completeness of web UI bundles.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (mode validation and dispatch)
//! - `config`: Configuration defaults loading and merging
//! - `catalog`: Catalog document parsing into message records
//! - `render`: Mixed-content flattening for the output formats
//! - `generators`: DITA, TOC, bundle and HTML writers
//! - `pseudo`: Pseudo-translation engine and source scanners
//! - `report`: Run reporting and summary output
//! - `template`: Per-language output path templating
//! - `tools`: External tool invocation (msgtool, xsltproc)
//! - `transcheck`: Translation completeness checking
//! - `vars`: `${NAME}` variable table and substitution

pub mod catalog;
pub mod cli;
pub mod config;
pub mod generators;
pub mod pseudo;
pub mod render;
pub mod report;
pub mod template;
pub mod tools;
pub mod transcheck;
pub mod vars;
