//! Column names of the vehicle-loan default dataset.
//!
//! Names are given in their normalized form, i.e. after `.` has been
//! replaced by `_` in the raw CSV headers (`Date.of.Birth` becomes
//! `Date_of_Birth`).

/// Bureau score description; holds the no-history sentinel.
pub const SCORE_DESCRIPTION: &str = "PERFORM_CNS_SCORE_DESCRIPTION";

/// Bureau credit score.
pub const CREDIT_SCORE: &str = "PERFORM_CNS_SCORE";

/// Description value marking a borrower without bureau history.
pub const NO_BUREAU_HISTORY: &str = "No Bureau History Available";

/// Scores below this value are "not scored" codes (11, 14-18), not scores.
pub const MIN_CREDIT_SCORE: f64 = 20.0;

pub const DATE_OF_BIRTH: &str = "Date_of_Birth";
pub const DISBURSAL_DATE: &str = "DisbursalDate";
pub const AVERAGE_ACCT_AGE: &str = "AVERAGE_ACCT_AGE";
pub const CREDIT_HISTORY_LENGTH: &str = "CREDIT_HISTORY_LENGTH";

/// Derived columns appended by the cleaning pipeline.
pub const AGE_IN_YEARS: &str = "AgeInYear";
pub const DAYS_SINCE_DISBURSEMENT: &str = "DaysSinceDisbursement";
pub const ACCT_AGE_IN_MONTHS: &str = "AcctAgeInMonths";
pub const CREDIT_HIST_LEN_IN_MONTHS: &str = "CreditHistLenInMonths";

/// Identifier-like codes and document flags that must be treated as text.
pub const CATEGORICAL_COLUMNS: [&str; 12] = [
    "branch_id",
    "supplier_id",
    "manufacturer_id",
    "Current_pincode_ID",
    "State_ID",
    "Employee_code_ID",
    "MobileNo_Avl_Flag",
    "Aadhar_flag",
    "PAN_flag",
    "VoterID_flag",
    "Driving_flag",
    "Passport_flag",
];

/// Columns only meaningful when the borrower has bureau history.
pub const BUREAU_COLUMNS: [&str; 8] = [
    CREDIT_SCORE,
    "PRI_NO_OF_ACCTS",
    "PRI_ACTIVE_ACCTS",
    "PRI_OVERDUE_ACCTS",
    "PRI_CURRENT_BALANCE",
    "PRI_SANCTIONED_AMOUNT",
    "PRI_DISBURSED_AMOUNT",
    "PRIMARY_INSTAL_AMT",
];

/// Always `1` in the source data.
pub const CONSTANT_COLUMNS: [&str; 1] = ["MobileNo_Avl_Flag"];

/// Too sparse or too high-cardinality for scorecarding.
pub const SPARSE_COLUMNS: [&str; 4] = [
    "supplier_id",
    "Current_pincode_ID",
    "Employee_code_ID",
    "branch_id",
];
