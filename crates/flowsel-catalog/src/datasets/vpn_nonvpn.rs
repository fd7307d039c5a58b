//! ISCX VPN-nonVPN time-based features (lowercase column names).

use crate::model::{DatasetEntry, StudyEntry};

pub(super) const DATASET: DatasetEntry = DatasetEntry {
    id: "vpn-nonvpn",
    source: "Data/VPN-nonVPN/VPN-nonVPN_train_features.csv",
    studies: &[DRAPER_GIL_2016, SHEN_2018_LIGHTWEIGHT],
};

const DRAPER_GIL_2016: StudyEntry = StudyEntry {
    id: "draper_gil2016",
    citation: "Draper-Gil et al. (2016) – VPN vs non-VPN burstiness features.",
    columns: &[
        "duration",
        "flowbytespersecond",
        "flowpktspersecond",
        "max_active",
        "mean_active",
        "min_active",
        "std_active",
        "max_idle",
        "mean_idle",
        "min_idle",
        "std_idle",
        "max_flowiat",
        "mean_flowiat",
        "min_flowiat",
        "std_flowiat",
        "time_window_s",
        "total_fiat",
        "total_biat",
    ],
};

const SHEN_2018_LIGHTWEIGHT: StudyEntry = StudyEntry {
    id: "shen2018_lightweight",
    citation: "Shen et al. (2018) – lightweight encrypted traffic identification.",
    columns: &[
        "duration",
        "flowbytespersecond",
        "flowpktspersecond",
        "mean_fiat",
        "mean_biat",
        "mean_active",
        "mean_idle",
        "std_active",
        "std_idle",
        "max_active",
        "max_idle",
        "time_window_s",
    ],
};
