use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

pub fn print_json<T: Serialize>(data: &T, format: &OutputFormat) {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data),
        OutputFormat::Compact => serde_json::to_string(data),
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
