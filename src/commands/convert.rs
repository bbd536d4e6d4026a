use crate::commands::DisplayOptions;
use crate::converter::{SizeValue, convert, format_size};
use crate::error::AppError;
use crate::unit::Unit;

pub struct ConvertOptions {
    pub size: f64,
    pub from: Unit,
    pub to: Unit,
    pub raw: bool,
    pub json: bool,
    pub display: DisplayOptions,
}

pub fn execute_convert(options: ConvertOptions) -> Result<f64, AppError> {
    let converted = convert(options.size, options.from, options.to)?;
    tracing::debug!(
        size = options.size,
        from = %options.from,
        to = %options.to,
        converted,
        "converted size"
    );

    if options.json {
        let value = SizeValue { size: converted, unit: options.to };
        println!("{}", serde_json::to_string(&value)?);
    } else if options.raw {
        println!("{converted}");
    } else {
        let format = options.display.resolve()?;
        println!("{}", format_size(converted, options.to, &format));
    }

    Ok(converted)
}
