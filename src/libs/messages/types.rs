#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String), // error message
    ConfigModuleAllocation,
    ConfigModuleDisplay,

    // === INPUT MESSAGES ===
    RecordsLoaded {
        source: String,
        count: usize,
    },
    RecordsParseFailed(String), // source
    InputReadFailed(String),    // source
    NoInputFiles,

    // === ALLOCATION MESSAGES ===
    AllocationFailed(String), // source
    NoActivity,

    // === REPORT MESSAGES ===
    HourlyHeader {
        zone: String,
        unit: String,
    },
    TeamHeader(usize), // member count
    DayHeader(String), // date
    TotalTime(String), // formatted duration
    MostActiveCategory {
        name: String,
        duration: String,
    },
    MostActiveHour {
        hour: usize,
        duration: String,
    },
    NoMostActive,

    // === EXPORT MESSAGES ===
    ExportWritten(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptSliceBy,
    PromptTimezone,
    PromptNegativePolicy,
    PromptUnit,
}
