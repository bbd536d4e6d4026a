use crate::commands::DisplayOptions;
use crate::converter::format_size;
use crate::error::AppError;
use crate::unit::Unit;

pub struct FormatCommandOptions {
    pub size: f64,
    pub unit: Unit,
    pub display: DisplayOptions,
}

pub fn execute_format(options: FormatCommandOptions) -> Result<String, AppError> {
    let format = options.display.resolve()?;
    let rendered = format_size(options.size, options.unit, &format);
    println!("{rendered}");
    Ok(rendered)
}
