//! Rust code generation.
//!
//! Each grammar rule becomes a function over an `egg_runtime::State`. The
//! generated source depends on `egg-runtime` only:
//! - matchers compile to boolean expressions over runtime calls
//! - sequences run inside `seq` so a failed sequence rewinds
//! - bound variables and `ps_val` are function locals, read by actions

mod emitter;
mod idents;
mod locals;


pub use emitter::RustEmitter;
pub use idents::rust_ident;
