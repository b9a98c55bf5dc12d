//! The `run` command: load JSON files as modules and evaluate them.

use std::fmt;
use std::path::PathBuf;

use kiln_module::{ModuleError, ModuleId, ModuleMap, ModuleStatus, DEFAULT_EXPORT};
use kiln_value::Value;

use crate::CliError;

/// Outcome of loading one module.
#[derive(Debug)]
pub struct ModuleReport {
    pub specifier: String,
    pub status: ModuleStatus,
    /// The module's default export, or why loading failed.
    pub outcome: Result<Value, ModuleError>,
}

impl ModuleReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for ModuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(
                f,
                "{} [{}]\n  {DEFAULT_EXPORT}: {} = {value}",
                self.specifier,
                self.status,
                value.type_name()
            ),
            Err(err) => write!(f, "{}", err.to_diagnostic()),
        }
    }
}

/// Register every `(specifier, source)` pair as a JSON module in `map`, then
/// load them in order.
///
/// Failures are per module. One bad document does not stop the rest.
pub fn load_json_modules<I>(map: &mut ModuleMap, inputs: I) -> Vec<ModuleReport>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut registered: Vec<(String, Result<ModuleId, ModuleError>)> = Vec::new();
    for (specifier, source) in inputs {
        let id = map.create_json(&specifier, source);
        registered.push((specifier, id));
    }

    registered
        .into_iter()
        .map(|(specifier, id)| {
            let (status, outcome) = match id {
                Ok(id) => {
                    let outcome = load_default(map, id);
                    (map.status(id), outcome)
                }
                Err(err) => (ModuleStatus::Unlinked, Err(err)),
            };
            tracing::debug!(module = %specifier, %status, "module loaded");
            ModuleReport {
                specifier,
                status,
                outcome,
            }
        })
        .collect()
}

fn load_default(map: &mut ModuleMap, id: ModuleId) -> Result<Value, ModuleError> {
    map.load(id)?;
    Ok(map.resolve_export(id, DEFAULT_EXPORT)?.get())
}

/// Read, load and report each file. Reports go to stdout, failed modules to
/// stderr.
pub fn run_files(paths: &[PathBuf]) -> Result<(), CliError> {
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        inputs.push((path.display().to_string(), source));
    }

    let mut map = ModuleMap::builder().capacity(inputs.len()).build();
    let reports = load_json_modules(&mut map, inputs);

    let mut failed = 0;
    for report in &reports {
        if report.is_ok() {
            println!("{report}");
        } else {
            failed += 1;
            eprintln!("{report}");
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::ModulesFailed {
            failed,
            total: reports.len(),
        })
    }
}
