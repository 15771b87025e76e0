//! Result adapters.
//!
//! A judging platform expects a verdict in its own shape: a specific exit
//! code table and a console line or report file format. A [`ResultAdapter`]
//! translates one [`Outcome`] into that shape.
//!
//! Built-in adapters, by registry id:
//! - `ifmo`: PCMS2 and APPES, with optional XML report
//! - `kitten`: Testsys
//! - `ejudge`: ejudge

pub mod ejudge;
pub mod ifmo;
pub mod kitten;

use std::io::Write;

use crate::error::Result;
use crate::outcome::Outcome;
use crate::registry::AdapterRegistry;

pub use ejudge::EjudgeAdapter;
pub use ifmo::IfmoAdapter;
pub use kitten::KittenAdapter;

/// Registry id of the adapter used when none is configured.
pub const DEFAULT_ADAPTER: &str = "ifmo";

/// Translates outcomes into one judging platform's conventions.
pub trait ResultAdapter {
    /// Registry id of this adapter.
    fn name(&self) -> &'static str;

    /// Apply platform-specific arguments trailing the report file name.
    fn init_args(&mut self, args: &[String]);

    /// Process exit code for `outcome`.
    fn exit_code_for(&self, outcome: &Outcome) -> Result<i32>;

    /// Write the report. `console` is set when the report goes to standard
    /// output instead of a report file.
    fn print_message(&self, outcome: &Outcome, out: &mut dyn Write, console: bool) -> Result<()>;
}

impl AdapterRegistry {
    /// Registry holding the three built-in adapters.
    pub fn builtin() -> Self {
        AdapterRegistry::new()
            .register(ifmo::ID, || Box::new(IfmoAdapter::default()))
            .register(kitten::ID, || Box::new(KittenAdapter))
            .register(ejudge::ID, || Box::new(EjudgeAdapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_ids() {
        let registry = AdapterRegistry::builtin();
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["ejudge", "ifmo", "kitten"]
        );
        assert!(registry.contains(DEFAULT_ADAPTER));
    }

    #[test]
    fn test_created_adapters_report_their_id() {
        let registry = AdapterRegistry::builtin();
        for id in ["ifmo", "kitten", "ejudge"] {
            let adapter = registry.create(id).expect("adapter");
            assert_eq!(adapter.name(), id);
        }
    }

    #[test]
    fn test_each_lookup_is_fresh() {
        let registry = AdapterRegistry::builtin();
        let mut first = registry.create("ifmo").unwrap();
        first.init_args(&["-xml".to_string()]);
        let second = registry.create("ifmo").unwrap();
        let outcome = Outcome::wrong_answer("x");
        assert_eq!(first.exit_code_for(&outcome).unwrap(), 0);
        assert_eq!(second.exit_code_for(&outcome).unwrap(), 1);
    }
}
