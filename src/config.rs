use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://smartgriddashboard.eirgrid.com/DashboardService.svc";

/// Attribution string carried in every output record.
pub const SOURCE: &str = "smartgriddashboard.eirgrid.com";

/// The dashboard's timestamp format, e.g. `01-Jan-2017 00:00:00`. No zone.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Date portion used in the `datefrom`/`dateto` query parameters.
pub const WINDOW_DATE_FORMAT: &str = "%d-%b-%Y";

/// Default timeout for the generation, fuel-mix and interconnection
/// requests, overridable on the builder. The two market requests carry no
/// timeout, matching observed provider usage.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fuel code standing for net imports over the East-West Interconnector.
/// Imports are accounted in the fuel mix but have no production category,
/// so this code is excluded from production breakdowns.
pub const IMPORT_FUEL_CODE: &str = "FUEL_EWIC";

/// Map from dashboard fuel codes to canonical fuel categories.
///
/// The dashboard's fuel-mix graph is broken down into Gas, Coal, Renewables,
/// Oil, Net import and Other. "Other" covers Peat, Combined Heat and Power
/// (CHP), Aggregated Generating Units (AGUs), Demand Side Units (DSUs),
/// Distillate and Waste. Renewable generation in Ireland is almost only wind.
pub fn fuel_categories() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("FUEL_COAL", "coal"),
        ("FUEL_EWIC", "GB->IE"),
        ("FUEL_GAS", "gas"),
        ("FUEL_OTHER_FOSSIL", "unknown"),
        ("FUEL_RENEW", "wind"),
    ])
}

/// Resolve the dashboard region code for a country code.
///
/// Region codes: Republic of Ireland `ROI`, Northern Ireland `NI`, entire
/// island `All`. Only `IE` is meaningfully supported; any other country code
/// falls back to the all-island region and still issues a request rather
/// than failing fast.
pub fn region_for(country_code: &str) -> &'static str {
    if country_code == "IE" {
        "ROI"
    } else {
        "All"
    }
}
