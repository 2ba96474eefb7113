/*!

Defines the AST data structures for the language described by the script
grammar. `CommandAST::construct` (and, recursively, `TermAST::construct`)
implement the conversion from AST into the internal representation the core
consumes.

*/

pub mod command;
pub mod term;

pub use command::{CommandAST, ParamAST};
pub use term::{BxTermAST, TermAST};
