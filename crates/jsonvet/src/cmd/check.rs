use jsonvet::Vetter;

use crate::cmd::CheckArgs;
use crate::exit::{io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_check_outcomes, CheckOutcome, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let vetter = Vetter::new();
    let mut outcomes = Vec::with_capacity(args.schemas.len());

    for path in &args.schemas {
        let text = std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;

        let outcome = match vetter.check(text.as_str()) {
            Ok(_) => CheckOutcome {
                schema: path.display().to_string(),
                ok: true,
                detail: None,
            },
            Err(err) => CheckOutcome {
                schema: path.display().to_string(),
                ok: false,
                detail: Some(err.to_string()),
            },
        };
        tracing::debug!(schema = %path.display(), ok = outcome.ok, "checked schema");
        outcomes.push(outcome);
    }

    print_check_outcomes(&outcomes, format);

    if outcomes.iter().all(|outcome| outcome.ok) {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}
