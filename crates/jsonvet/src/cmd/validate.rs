use std::io::Read;
use std::path::Path;

use jsonvet::engine::EngineConfig;
use jsonvet::Vetter;

use crate::cmd::ValidateArgs;
use crate::exit::{io_error, vet_error, CliResult, SUCCESS};
use crate::output::{print_value, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let instance = read_document(&args.instance)?;
    let schema = std::fs::read_to_string(&args.schema).map_err(|err| {
        io_error(&format!("failed reading {}", args.schema.display()), err)
    })?;

    let vetter = match args.draft {
        Some(draft) => Vetter::with_config(EngineConfig {
            draft: Some(draft.into()),
        }),
        None => Vetter::new(),
    };

    let normalized = vetter
        .validate(instance.as_str(), schema.as_str())
        .map_err(|err| vet_error("validation failed", err))?;

    tracing::debug!(
        instance = %args.instance.display(),
        schema = %args.schema.display(),
        "instance validated"
    );
    print_value(&normalized, format);
    Ok(SUCCESS)
}

fn read_document(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}
