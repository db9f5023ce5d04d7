use super::{Currency, Exchange, Index};

#[rustfmt::skip]
pub(super) const EXCHANGES: &[Exchange] = &[
    Exchange { id: 1, name: "Munich Exchange", code: "MU" },
    Exchange { id: 2, name: "Berlin Exchange", code: "BE" },
    Exchange { id: 3, name: "Frankfurt Exchange", code: "F" },
    Exchange { id: 4, name: "Stuttgart Exchange", code: "STU" },
    Exchange { id: 5, name: "Mexican Exchange", code: "MX" },
    Exchange { id: 6, name: "Hanover Exchange", code: "HA" },
    Exchange { id: 8, name: "Australian Exchange", code: "AU" },
    Exchange { id: 9, name: "Singapore Exchange", code: "SG" },
    Exchange { id: 10, name: "Indexes", code: "INDX" },
    Exchange { id: 11, name: "USA Stocks", code: "US" },
    Exchange { id: 12, name: "Kuala Lumpur Exchange", code: "KLSE" },
    Exchange { id: 13, name: "Funds", code: "FUND" },
    Exchange { id: 14, name: "Bombay Exchange", code: "BSE" },
    Exchange { id: 15, name: "Dusseldorf Exchange", code: "DU" },
    Exchange { id: 16, name: "London Exchange", code: "LSE" },
    Exchange { id: 17, name: "Euronext Paris", code: "PA" },
    Exchange { id: 18, name: "XETRA Exchange", code: "XETRA" },
    Exchange { id: 19, name: "NSE (India)", code: "NSE" },
    Exchange { id: 20, name: "Hong Kong Exchange", code: "HK" },
    Exchange { id: 21, name: "Borsa Italiana", code: "MI" },
    Exchange { id: 22, name: "SIX Swiss Exchange", code: "SW" },
    Exchange { id: 23, name: "Hamburg Exchange", code: "HM" },
    Exchange { id: 24, name: "Toronto Exchange", code: "TO" },
    Exchange { id: 25, name: "Stockholm Exchange", code: "ST" },
    Exchange { id: 26, name: "Oslo Stock Exchange", code: "OL" },
    Exchange { id: 27, name: "Euronext Amsterdam", code: "AS" },
    Exchange { id: 28, name: "Coppenhagen Exchange", code: "CO" },
    Exchange { id: 29, name: "Euronext Lisbon", code: "LS" },
    Exchange { id: 30, name: "Korea Stock Exchange", code: "KO" },
    Exchange { id: 31, name: "Shanghai Exchange", code: "SS" },
    Exchange { id: 32, name: "Taiwan Exchange", code: "TW" },
    Exchange { id: 33, name: "Sao Paolo Exchange", code: "SA" },
    Exchange { id: 34, name: "Euronext Brussels", code: "BR" },
    Exchange { id: 35, name: "Madrid Exchange", code: "MC" },
    Exchange { id: 36, name: "Vienna Exchange", code: "VI" },
    Exchange { id: 37, name: "New Zealand Exchange", code: "NZ" },
    Exchange { id: 38, name: "FOREX", code: "FX" },
    Exchange { id: 39, name: "London IL", code: "IL" },
    Exchange { id: 40, name: "Irish Exchange", code: "IR" },
    Exchange { id: 41, name: "MICEX Russia", code: "MCX" },
    Exchange { id: 42, name: "OTC Market", code: "OTC" },
    Exchange { id: 43, name: "ETF-Euronext", code: "NX" },
    Exchange { id: 44, name: "Johannesburg Exchange", code: "JSE" },
];

#[rustfmt::skip]
pub(super) const CURRENCIES: &[Currency] = &[
    Currency { id: 1, exchange_code: "FX", code: "USD" },
    Currency { id: 2, exchange_code: "FX", code: "EUR" },
    Currency { id: 3, exchange_code: "FX", code: "RUB" },
    Currency { id: 4, exchange_code: "FX", code: "GBP" },
    Currency { id: 5, exchange_code: "FX", code: "CNY" },
    Currency { id: 6, exchange_code: "FX", code: "JPY" },
    Currency { id: 7, exchange_code: "FX", code: "SGD" },
    Currency { id: 8, exchange_code: "FX", code: "INR" },
    Currency { id: 9, exchange_code: "FX", code: "CHF" },
    Currency { id: 10, exchange_code: "FX", code: "AUD" },
    Currency { id: 11, exchange_code: "FX", code: "CAD" },
    Currency { id: 12, exchange_code: "FX", code: "HKD" },
    Currency { id: 13, exchange_code: "FX", code: "MYR" },
    Currency { id: 14, exchange_code: "FX", code: "NOK" },
    Currency { id: 15, exchange_code: "FX", code: "NZD" },
    Currency { id: 16, exchange_code: "FX", code: "ZAR" },
    Currency { id: 17, exchange_code: "FX", code: "SEK" },
    Currency { id: 18, exchange_code: "FX", code: "DKK" },
    Currency { id: 19, exchange_code: "FX", code: "BRL" },
    Currency { id: 20, exchange_code: "FX", code: "ZAC" },
    Currency { id: 21, exchange_code: "FX", code: "MXN" },
    Currency { id: 22, exchange_code: "FX", code: "TWD" },
    Currency { id: 23, exchange_code: "FX", code: "KRW" },
    Currency { id: 24, exchange_code: "FX", code: "CLP" },
    Currency { id: 25, exchange_code: "FX", code: "CZK" },
    Currency { id: 26, exchange_code: "FX", code: "HUF" },
    Currency { id: 27, exchange_code: "FX", code: "IDR" },
    Currency { id: 28, exchange_code: "FX", code: "ISK" },
    Currency { id: 29, exchange_code: "FX", code: "MXV" },
    Currency { id: 30, exchange_code: "FX", code: "PLN" },
    Currency { id: 31, exchange_code: "FX", code: "TRY" },
    Currency { id: 32, exchange_code: "FX", code: "UYU" },
    Currency { id: 33, exchange_code: "FX", code: "BTC" },
];

#[rustfmt::skip]
pub(super) const INDEXES: &[Index] = &[
    Index { id: 1, exchange_code: "INDX", code: "GSPC", name: "S&P 500" },
    Index { id: 2, exchange_code: "INDX", code: "GDAXI", name: "DAX Index" },
    Index { id: 3, exchange_code: "INDX", code: "SSEC", name: "Shanghai Composite Index (China)" },
    Index { id: 4, exchange_code: "INDX", code: "MERV", name: "MERVAL Index (Argentina)" },
    Index { id: 5, exchange_code: "INDX", code: "FTSE", name: "FTSE 100 Index (UK)" },
    Index { id: 6, exchange_code: "INDX", code: "AORD", name: "All Ordinaries Index (Australia)" },
    Index { id: 7, exchange_code: "INDX", code: "BSESN", name: "BSE 30 Sensitivity Index (SENSEX)" },
    Index { id: 8, exchange_code: "INDX", code: "VIX", name: "VIX S&P 500 Volatility Index" },
    Index { id: 9, exchange_code: "INDX", code: "HSI", name: "Hang Seng Index (Hong Kong)" },
    Index { id: 10, exchange_code: "INDX", code: "GSPTSE", name: "S&P TSX Composite Index (Canada)" },
    Index { id: 11, exchange_code: "INDX", code: "FCHI", name: "CAC 40 Index" },
    Index { id: 12, exchange_code: "INDX", code: "TA100", name: "Tel Aviv 100 Index (Israel" },
    Index { id: 13, exchange_code: "INDX", code: "CYC", name: "Morgan Stanley Cyclical Index" },
    Index { id: 14, exchange_code: "INDX", code: "IIX", name: "Interactive Week Internet Index" },
    Index { id: 15, exchange_code: "INDX", code: "CMR", name: "Morgan Stanley Consumer Index" },
    Index { id: 16, exchange_code: "INDX", code: "GOX", name: "CBOE Gold Inde" },
    Index { id: 17, exchange_code: "INDX", code: "RTS_RS", name: "RTSI Index" },
    Index { id: 18, exchange_code: "INDX", code: "GD_AT", name: "Athens Composite Inde" },
    Index { id: 19, exchange_code: "INDX", code: "FTSEMIB_MI", name: "Untitled Dataset 2015-07-13 20:00:12" },
    Index { id: 20, exchange_code: "INDX", code: "WILREIT", name: "Wilshire US REIT Inde" },
    Index { id: 21, exchange_code: "INDX", code: "W5KMCG", name: "Wilshire US Mid Cap Growt" },
    Index { id: 22, exchange_code: "INDX", code: "IBEX", name: "IBEX 35 Index" },
    Index { id: 23, exchange_code: "INDX", code: "W5KLCV", name: "Wilshire US Large Cap Valu" },
    Index { id: 24, exchange_code: "INDX", code: "SSMI", name: "Swiss Market Index" },
    Index { id: 25, exchange_code: "INDX", code: "OEX", name: "S&P 100 Inde" },
    Index { id: 26, exchange_code: "INDX", code: "RUI", name: "Russell 1000 Inde" },
    Index { id: 27, exchange_code: "INDX", code: "XAX", name: "NYSE AMEX Composite Inde" },
    Index { id: 28, exchange_code: "INDX", code: "WILRESI", name: "Wilshire US Real Estate Securities Inde" },
    Index { id: 29, exchange_code: "INDX", code: "NZ50", name: "NZSE 50 (New Zealand)" },
    Index { id: 30, exchange_code: "INDX", code: "UTY", name: "PHLX Utility Sector Inde" },
    Index { id: 31, exchange_code: "INDX", code: "CSE", name: "Colombo All Shares Index (Sri Lanka" },
    Index { id: 32, exchange_code: "INDX", code: "XOI", name: "NYSE AMEX Oil Inde" },
    Index { id: 33, exchange_code: "INDX", code: "OSX", name: "PHLX Oil Service Sector Inde" },
    Index { id: 34, exchange_code: "INDX", code: "XAL", name: "NYSE AMEX Airline Inde" },
    Index { id: 35, exchange_code: "INDX", code: "W5KSCG", name: "Wilshire US Small Cap Growt" },
    Index { id: 36, exchange_code: "INDX", code: "TWII", name: "Taiwan Weighted Inde" },
    Index { id: 37, exchange_code: "INDX", code: "ATX", name: "ATX Index (Austria" },
    Index { id: 38, exchange_code: "INDX", code: "NWX", name: "NYSE ARCA Networking Inde" },
    Index { id: 39, exchange_code: "INDX", code: "W5KSCV", name: "Wilshire US Small Cap Valu" },
    Index { id: 40, exchange_code: "INDX", code: "XAU", name: "PHLX Gold/Silver Sector Inde" },
    Index { id: 41, exchange_code: "INDX", code: "W5KMCV", name: "Wilshire US Mid Cap Valu" },
    Index { id: 42, exchange_code: "INDX", code: "WGREIT", name: "Wilshire Global REIT Inde" },
    Index { id: 43, exchange_code: "INDX", code: "SML", name: "S&P Small-Cap 600 Inde" },
    Index { id: 44, exchange_code: "INDX", code: "RUT", name: "Russell 2000 Inde" },
    Index { id: 45, exchange_code: "INDX", code: "JKSE", name: "Jakarta Composite Index (Indonesia" },
    Index { id: 46, exchange_code: "INDX", code: "BFX", name: "Euronext BEL-20 Index (Belgium)" },
    Index { id: 47, exchange_code: "INDX", code: "XBD", name: "NYSE AMEX Securities Broker/Dealer Inde" },
    Index { id: 48, exchange_code: "INDX", code: "RUA", name: "Russell 3000 Inde" },
    Index { id: 49, exchange_code: "INDX", code: "XII", name: "NYSE ARCA Institutional Inde" },
    Index { id: 50, exchange_code: "INDX", code: "IETP", name: "ISEQ 20 Price Index (Ireland" },
    Index { id: 51, exchange_code: "INDX", code: "DRG", name: "NYSE AMEX Pharmaceutical Inde" },
    Index { id: 52, exchange_code: "INDX", code: "W5000", name: "Wilshire 5000 Total Market Inde" },
    Index { id: 53, exchange_code: "INDX", code: "HGX", name: "PHLX Housing Sector Inde" },
    Index { id: 54, exchange_code: "INDX", code: "MXX", name: "IPC Index (Mexico)" },
    Index { id: 55, exchange_code: "INDX", code: "W5KLCG", name: "Wilshire US Large Cap Growt" },
    Index { id: 56, exchange_code: "INDX", code: "STI", name: "Straits Times Index" },
    Index { id: 57, exchange_code: "INDX", code: "KS11", name: "KOSPI Composite Index" },
    Index { id: 58, exchange_code: "INDX", code: "AEX", name: "AEX Amsterdam Index" },
    Index { id: 59, exchange_code: "INDX", code: "NYA", name: "NYSE Composite Index" },
    Index { id: 60, exchange_code: "INDX", code: "XMI", name: "NYSE ARCA Major Market Inde" },
    Index { id: 61, exchange_code: "INDX", code: "BTK", name: "NYSE AMEX Biotechnology Inde" },
    Index { id: 62, exchange_code: "INDX", code: "EPX", name: "NASDAQ SIG Oil Exploration and Production Inde" },
    Index { id: 63, exchange_code: "INDX", code: "MID", name: "S&P Mid-Cap 400 Inde" },
    Index { id: 64, exchange_code: "INDX", code: "HUI", name: "NYSE Arca Gold Bugs Inde" },
    Index { id: 65, exchange_code: "INDX", code: "SOX", name: "PHLX Semiconductor Inde" },
    Index { id: 66, exchange_code: "INDX", code: "HCX", name: "CBOE S&P Healthcare Index" },
    Index { id: 67, exchange_code: "INDX", code: "XCI", name: "NYSE AMEX Computer Technology Inde" },
    Index { id: 68, exchange_code: "INDX", code: "XNG", name: "NYSE AMEX Natural Gas Inde" },
    Index { id: 69, exchange_code: "INDX", code: "RMZ", name: "MSCI US REIT Inde" },
    Index { id: 70, exchange_code: "INDX", code: "WGRESI", name: "Wilshire Global Real Estate Securities Inde" },
    Index { id: 71, exchange_code: "INDX", code: "N225", name: "Nikkei 225 Index (Japan" },
    Index { id: 72, exchange_code: "INDX", code: "VDAX", name: "Deutsche Boerse VDAX Volatility Inde" },
    Index { id: 73, exchange_code: "INDX", code: "MXY", name: "NYSE ARCA Mexico Inde" },
    Index { id: 74, exchange_code: "INDX", code: "OSEAX", name: "Oslo Exchange All Share Index (Norway)" },
    Index { id: 75, exchange_code: "INDX", code: "TYX", name: "Treasury Yield 30 Years Inde" },
    Index { id: 76, exchange_code: "INDX", code: "DJI", name: "Dow Jones Industrial Average" },
    Index { id: 77, exchange_code: "INDX", code: "AXPJ", name: "S&P/ASX 200 Australia REIT Inde" },
    Index { id: 78, exchange_code: "INDX", code: "PSI20", name: "PSI 20 Stock Index (Portugal" },
    Index { id: 79, exchange_code: "INDX", code: "IRX", name: "13-week Treasury Bill Inde" },
    Index { id: 80, exchange_code: "INDX", code: "FVX", name: "Treasury Yield 5 Years Inde" },
    Index { id: 81, exchange_code: "INDX", code: "NYI", name: "NYSE International 100 Index" },
    Index { id: 82, exchange_code: "INDX", code: "AXJO", name: "S&P/ASX 200 Index (Australia" },
    Index { id: 83, exchange_code: "INDX", code: "512NTR", name: "S&P 500 GBP Hdg (Net TR) (^512NTR)" },
    Index { id: 84, exchange_code: "INDX", code: "CTES_VI", name: "Czech Trading Inde" },
    Index { id: 85, exchange_code: "INDX", code: "NSEI", name: "S&P/CNX Nifty Index (India" },
    Index { id: 86, exchange_code: "INDX", code: "NYY", name: "NYSE TMT Inde" },
    Index { id: 87, exchange_code: "INDX", code: "CCSI", name: "EGX 70 Price Index (Egypt" },
    Index { id: 88, exchange_code: "INDX", code: "SPSUPX", name: "S&P Composite 1500 Inde" },
    Index { id: 89, exchange_code: "INDX", code: "BVSP", name: "Bovespa Index (Brazil)" },
    Index { id: 90, exchange_code: "INDX", code: "ISEQ", name: "ISEQ Overall Price Index (Ireland" },
    Index { id: 91, exchange_code: "INDX", code: "JPN", name: "NYSE AMEX Japan Inde" },
    Index { id: 92, exchange_code: "INDX", code: "NYL", name: "NYSE World Leaders Inde" },
    Index { id: 93, exchange_code: "INDX", code: "TNX", name: "CBOE Interest Rate 10-Year T-Note Inde" },
    Index { id: 94, exchange_code: "INDX", code: "NY", name: "NYSE US 100 Inde" },
    Index { id: 95, exchange_code: "INDX", code: "SPLV", name: "PowerShares S&P 500 Low Volatil" },
    Index { id: 96, exchange_code: "INDX", code: "OMXSPI", name: "Stockholm General Index (Sweden)" },
    Index { id: 97, exchange_code: "INDX", code: "GVZ", name: "CBOE Gold Volatility Inde" },
    Index { id: 98, exchange_code: "INDX", code: "SPY", name: "SPDR S&P 500 (SPY" },
    Index { id: 99, exchange_code: "INDX", code: "IEQR_IR", name: "ISEQ General Total Return Index (Ireland" },
    Index { id: 100, exchange_code: "INDX", code: "OMXC20_CO", name: "OMX Copenhagen 20 Index" },
    Index { id: 101, exchange_code: "INDX", code: "DJUSFN", name: "^DJUSFN: Dow Jones U.S. Financials Inde" },
    Index { id: 102, exchange_code: "INDX", code: "DJASD", name: "^DJASD: Dow Jones Asia Select Dividen" },
    Index { id: 103, exchange_code: "INDX", code: "IMUS", name: "^IMUS: Dow Jones Islamic Market U.S." },
    Index { id: 104, exchange_code: "INDX", code: "W1SGI", name: "^W1SGI: Dow Jones Sustainability Worl" },
    Index { id: 105, exchange_code: "INDX", code: "DJT", name: "^DJT: Dow Jones Transportation Averag" },
    Index { id: 106, exchange_code: "INDX", code: "DJUSM", name: "^DJUSM: Dow Jones U.S. Mid-Cap Inde" },
    Index { id: 107, exchange_code: "INDX", code: "W1XGA", name: "^W1XGA: Dow Jones Sustainability Worl" },
    Index { id: 108, exchange_code: "INDX", code: "DWC", name: "^DWC: DJUS Market Index (full-cap" },
    Index { id: 109, exchange_code: "INDX", code: "DJC", name: "^DJC: Dow Jones-UBS Commodity Inde" },
    Index { id: 110, exchange_code: "INDX", code: "IMXL", name: "^IMXL: Dow Jones Islamic Market Titan" },
    Index { id: 111, exchange_code: "INDX", code: "XLHK", name: "^XLHK: Dow Jones Hong Kong Titans 30" },
    Index { id: 112, exchange_code: "INDX", code: "DJTMDI", name: "^DJTMDI: Dow Jones Media Titans 30 Inde" },
    Index { id: 113, exchange_code: "INDX", code: "DJU", name: "^DJU: Dow Jones Utility Averag" },
    Index { id: 114, exchange_code: "INDX", code: "DWCOGS", name: "^DWCOGS: Dow Jones U.S. Oil & Gas Tota" },
    Index { id: 115, exchange_code: "INDX", code: "DJUSST", name: "^DJUSST: Dow Jones U.S. Iron & Steel In" },
    Index { id: 116, exchange_code: "INDX", code: "PSE", name: "^PSE: NYSE Arca Tech 100 Index - New York Stock Exchange" },
    Index { id: 117, exchange_code: "INDX", code: "DWCF", name: "^DWCF: Dow Jones U.S. Total Stock Mar" },
    Index { id: 118, exchange_code: "INDX", code: "W1SUS", name: "^W1SUS: Dow Jones Sustainability Worl" },
    Index { id: 119, exchange_code: "INDX", code: "DJASDT", name: "^DJASDT: Dow Jones Asia Select Dividen" },
    Index { id: 120, exchange_code: "INDX", code: "RCI", name: "^RCI: Dow Jones Composite All REIT I" },
    Index { id: 121, exchange_code: "INDX", code: "DJUSL", name: "^DJUSL: Dow Jones U.S. Large-Cap Inde" },
    Index { id: 122, exchange_code: "INDX", code: "P1DOW", name: "^P1DOW: Dow Jones Asia/Pacific Inde" },
    Index { id: 123, exchange_code: "INDX", code: "DJAT", name: "^DJAT: Dow Jones Asian Titans 50 Inde" },
    Index { id: 124, exchange_code: "INDX", code: "DJUS", name: "^DJUS: Dow Jones U.S. Inde" },
    Index { id: 125, exchange_code: "INDX", code: "DWMI", name: "^DWMI: Dow Jones U.S. Micro-Cap Tota" },
    Index { id: 126, exchange_code: "INDX", code: "DJUSS", name: "^DJUSS: Dow Jones U.S. Small-Cap Inde" },
    Index { id: 127, exchange_code: "INDX", code: "OMX", name: "OMXS 30 Index (Sweden" },
    Index { id: 128, exchange_code: "INDX", code: "STOXX50E", name: "EuroStoxx 50 Inde" },
    Index { id: 129, exchange_code: "INDX", code: "FTAS", name: "FTSE All-Share Index (UK)" },
    Index { id: 130, exchange_code: "INDX", code: "WIHUN_L", name: "FTSE HUngary Index" },
    Index { id: 131, exchange_code: "INDX", code: "WITUR_L", name: "FTSE Turkey Index" },
    Index { id: 132, exchange_code: "INDX", code: "WITHA_L", name: "FTSE Thailand Index" },
    Index { id: 133, exchange_code: "INDX", code: "WIPOL_L", name: "FTSE Poland Index" },
    Index { id: 134, exchange_code: "INDX", code: "WICZH_L", name: "FTSE Czech Republic Index" },
    Index { id: 135, exchange_code: "INDX", code: "OMXC20", name: "OMX Copenhagen 20 Inde" },
    Index { id: 136, exchange_code: "INDX", code: "IXE", name: "^IXE: Select Sector Spdr-energy Inde" },
    Index { id: 137, exchange_code: "INDX", code: "IXIC", name: "NASDAQ Composite" },
    Index { id: 138, exchange_code: "INDX", code: "SPEUP", name: "S&P EUROPE 350" },
];
