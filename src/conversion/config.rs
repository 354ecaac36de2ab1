//! Configuration options for the CSV to JSON conversion pipeline

/// Input cell delimiter options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelimiterType {
    /// Comma delimiter (,)
    Comma,
    /// Semicolon delimiter (;)
    Semicolon,
    /// Tab delimiter (\t)
    Tab,
}

impl DelimiterType {
    pub fn as_byte(&self) -> u8 {
        match self {
            DelimiterType::Comma => b',',
            DelimiterType::Semicolon => b';',
            DelimiterType::Tab => b'\t',
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(DelimiterType::Comma),
            "semicolon" | ";" => Ok(DelimiterType::Semicolon),
            "tab" | "\t" => Ok(DelimiterType::Tab),
            other => Err(format!(
                "Invalid delimiter '{}'. Use 'comma', 'semicolon', or 'tab'",
                other
            )),
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Extension of input files to pick up (without the dot)
    pub input_extension: String,
    /// Extension given to output files (without the dot)
    pub output_extension: String,
    /// Input cell delimiter
    pub delimiter: DelimiterType,
    /// Report each converted file on stdout
    pub quiet: bool,
    /// Keep converting remaining files when one file fails
    pub continue_on_error: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_extension: "csv".to_string(),
            output_extension: "json".to_string(),
            delimiter: DelimiterType::Comma,
            quiet: false,
            continue_on_error: false,
        }
    }
}
