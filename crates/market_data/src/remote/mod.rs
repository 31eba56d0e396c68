pub mod chart_response;
pub mod yahoo_client;

pub use chart_response::ChartResponse;
pub use yahoo_client::YahooClient;

/// Maps a display ticker onto the form the chart endpoint addresses,
/// e.g. share classes `BRK.B` and `BF/B` become `BRK-B` and `BF-B`.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '.' | '/' => '-',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
