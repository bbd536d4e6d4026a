use crate::commands::DisplayOptions;
use crate::converter::{SizeValue, best_unit, humanize};
use crate::error::AppError;

pub struct BestOptions {
    pub bytes: f64,
    pub json: bool,
    pub display: DisplayOptions,
}

pub fn execute_best(options: BestOptions) -> Result<SizeValue, AppError> {
    let value = SizeValue::from(best_unit(options.bytes)?);
    tracing::debug!(
        bytes = options.bytes,
        unit = %value.unit,
        size = value.size,
        "selected best unit"
    );

    if options.json {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        let format = options.display.resolve()?;
        println!("{}", humanize(options.bytes, &format)?);
    }

    Ok(value)
}
