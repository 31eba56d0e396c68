/// Built-in universe: S&P 500 constituents plus popular growth names.
/// A few tickers appear in more than one sector group; [`default_universe`]
/// keeps the first occurrence.
pub const SYMBOLS: &[&str; 481] = &[
    // Technology
    "AAPL", "MSFT", "NVDA", "AVGO", "ORCL", "CRM", "CSCO", "ACN", "ADBE", "IBM",
    "INTC", "QCOM", "TXN", "AMD", "AMAT", "MU", "LRCX", "ADI", "KLAC", "SNPS",
    "CDNS", "MCHP", "FTNT", "PANW", "MSI", "TEL", "HPQ", "HPE", "KEYS", "ON",
    "NXPI", "MPWR", "SWKS", "FSLR", "TER", "ZBRA", "NTAP", "WDC", "STX", "JNPR",
    "FFIV", "AKAM", "CTSH", "IT", "EPAM", "GDDY", "GEN", "PAYC", "PAYX", "FICO",
    // Communication Services
    "GOOGL", "GOOG", "META", "NFLX", "DIS", "CMCSA", "VZ", "TMUS", "T", "CHTR",
    "EA", "TTWO", "WBD", "PARA", "OMC", "IPG", "LYV", "MTCH", "FOXA", "FOX",
    "NWSA", "NWS",
    // Consumer Discretionary
    "AMZN", "TSLA", "HD", "MCD", "NKE", "LOW", "SBUX", "TJX", "BKNG", "CMG",
    "ORLY", "AZO", "MAR", "HLT", "GM", "F", "ROST", "DHI", "LEN", "PHM",
    "YUM", "EBAY", "APTV", "GRMN", "POOL", "BBY", "DRI", "MGM", "WYNN", "CZR",
    "CCL", "RCL", "NCLH", "LVS", "ULTA", "LULU", "NVR", "TSCO", "DPZ", "DECK",
    "EXPE", "GPC", "LKQ", "BWA", "ETSY", "TPR", "RL", "HAS", "WHR", "KMX",
    // Consumer Staples
    "WMT", "PG", "COST", "KO", "PEP", "PM", "MO", "MDLZ", "CL", "KMB",
    "GIS", "HSY", "K", "KHC", "SYY", "STZ", "KDP", "MNST", "ADM", "CAG",
    "CPB", "HRL", "MKC", "SJM", "CLX", "CHD", "EL", "TSN", "TAP", "BG",
    "KR", "WBA", "TGT", "DG", "DLTR",
    // Energy
    "XOM", "CVX", "COP", "SLB", "EOG", "MPC", "PSX", "VLO", "PXD", "OXY",
    "WMB", "KMI", "HAL", "DVN", "HES", "BKR", "FANG", "TRGP", "OKE", "CTRA",
    "MRO", "APA",
    // Financials
    "BRK.B", "JPM", "V", "MA", "BAC", "WFC", "GS", "MS", "SPGI", "BLK",
    "C", "AXP", "SCHW", "CB", "MMC", "PGR", "AON", "CME", "ICE", "MCO",
    "USB", "PNC", "TFC", "AIG", "MET", "PRU", "AFL", "ALL", "TRV", "COF",
    "BK", "STT", "FITB", "MTB", "HBAN", "RF", "CFG", "KEY", "NTRS", "DFS",
    "SYF", "CINF", "L", "RE", "GL", "WRB", "AJG", "MSCI", "NDAQ", "FDS",
    "CBOE", "RJF", "BRO", "AIZ",
    // Healthcare
    "UNH", "JNJ", "LLY", "PFE", "ABBV", "MRK", "TMO", "ABT", "DHR", "BMY",
    "AMGN", "GILD", "VRTX", "MDT", "ISRG", "ELV", "CI", "CVS", "SYK", "BSX",
    "BDX", "ZBH", "HUM", "REGN", "MCK", "CAH", "HCA", "IDXX", "IQV", "EW",
    "A", "DXCM", "MTD", "RMD", "ALGN", "WST", "BAX", "ZTS", "BIIB", "MRNA",
    "MOH", "CNC", "HOLX", "ILMN", "TECH", "CRL", "DGX", "LH", "VTRS", "CTLT",
    "HSIC", "OGN", "XRAY", "DVA", "INCY",
    // Industrials
    "CAT", "UNP", "HON", "UPS", "RTX", "BA", "DE", "LMT", "GE", "ADP",
    "ETN", "ITW", "NOC", "GD", "WM", "CSX", "NSC", "EMR", "FDX", "MMM",
    "JCI", "PH", "CTAS", "CARR", "TT", "CMI", "PCAR", "FAST", "OTIS", "ROK",
    "AME", "VRSK", "RSG", "CPRT", "ODFL", "GWW", "PWR", "HWM", "LHX", "TDG",
    "IR", "DOV", "PAYX", "XYL", "JBHT", "DAL", "UAL", "LUV", "AAL", "EXPD",
    "CHRW", "WAB", "FTV", "SWK", "IEX", "PNR", "LDOS", "J", "MAS", "ALLE",
    "NDSN", "GNRC", "SNA", "RHI", "BR", "ROL", "PAYC",
    // Materials
    "LIN", "APD", "SHW", "FCX", "ECL", "NEM", "NUE", "VMC", "MLM", "DOW",
    "DD", "CTVA", "PPG", "ALB", "IFF", "LYB", "CF", "FMC", "MOS", "CE",
    "PKG", "IP", "AVY", "SEE", "EMN", "BALL", "WRK", "AMCR", "STLD",
    // Real Estate
    "AMT", "PLD", "CCI", "EQIX", "PSA", "SPG", "O", "WELL", "DLR", "VICI",
    "SBAC", "AVB", "EQR", "WY", "VTR", "ARE", "MAA", "EXR", "INVH", "IRM",
    "ESS", "UDR", "KIM", "REG", "HST", "BXP", "CPT", "PEAK", "FRT",
    // Utilities
    "NEE", "DUK", "SO", "D", "AEP", "SRE", "EXC", "XEL", "PCG", "WEC",
    "ED", "PEG", "ES", "AWK", "EIX", "DTE", "FE", "PPL", "ETR", "AEE",
    "CMS", "CNP", "ATO", "EVRG", "NI", "LNT", "PNW", "NRG",
    // Additional Large Caps / Popular Stocks
    "PYPL", "SQ", "SHOP", "SPOT", "ZM", "ROKU", "COIN", "HOOD", "UBER", "LYFT",
    "ABNB", "RIVN", "LCID", "ARM", "SMCI", "SNOW", "DDOG", "NET", "MDB", "OKTA",
    "ZS", "CRWD", "TEAM", "TTD", "PLTR", "MELI", "SE", "NU", "GRAB", "RBLX",
    "DASH", "PINS", "SNAP", "U", "PATH", "AFRM", "UPST", "SOFI", "MSTR", "IONQ",
];

pub fn default_universe() -> Vec<String> {
    dedup_symbols(SYMBOLS.iter().map(|s| s.to_string()))
}

/// Removes repeated tickers while keeping first-seen order.
pub fn dedup_symbols<I>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    symbols
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
