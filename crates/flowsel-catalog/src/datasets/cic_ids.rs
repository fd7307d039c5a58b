//! CIC-IDS-2017 flow features (CICFlowMeter column names).

use crate::model::{DatasetEntry, StudyEntry};

pub(super) const DATASET: DatasetEntry = DatasetEntry {
    id: "cic-ids",
    source: "Data/CIC-IDS/CIC-IDS-2017-train_features.csv",
    studies: &[ANDERSON_2016, DRAPER_GIL_2016, LOTFOLLAHI_2017],
};

const ANDERSON_2016: StudyEntry = StudyEntry {
    id: "anderson2016",
    citation: "Anderson & McGrew (2016) – encrypted malware detection with flow metadata.",
    columns: &[
        "Flow Duration",
        "Total Fwd Packets",
        "Total Backward Packets",
        "Total Length of Fwd Packets",
        "Total Length of Bwd Packets",
        "Fwd Packet Length Mean",
        "Fwd Packet Length Std",
        "Bwd Packet Length Mean",
        "Bwd Packet Length Std",
        "Flow Bytes/s",
        "Flow Packets/s",
        "Flow IAT Mean",
        "Flow IAT Std",
        "Flow IAT Max",
        "Flow IAT Min",
        "Fwd IAT Mean",
        "Fwd IAT Std",
        "Bwd IAT Mean",
        "Bwd IAT Std",
        "Min Packet Length",
        "Max Packet Length",
        "Packet Length Mean",
        "Packet Length Std",
        "Packet Length Variance",
        "FIN Flag Count",
        "SYN Flag Count",
        "RST Flag Count",
        "PSH Flag Count",
        "ACK Flag Count",
        "URG Flag Count",
        "Down/Up Ratio",
        "Average Packet Size",
    ],
};

const DRAPER_GIL_2016: StudyEntry = StudyEntry {
    id: "draper_gil2016",
    citation: "Draper-Gil et al. (2016) – CICFlowMeter VPN/non-VPN characterization.",
    columns: &[
        "Flow Duration",
        "Total Fwd Packets",
        "Total Backward Packets",
        "Total Length of Fwd Packets",
        "Total Length of Bwd Packets",
        "Fwd Packet Length Max",
        "Fwd Packet Length Min",
        "Fwd Packet Length Mean",
        "Fwd Packet Length Std",
        "Bwd Packet Length Max",
        "Bwd Packet Length Min",
        "Bwd Packet Length Mean",
        "Bwd Packet Length Std",
        "Flow IAT Mean",
        "Flow IAT Std",
        "Flow IAT Max",
        "Flow IAT Min",
        "Fwd IAT Mean",
        "Fwd IAT Std",
        "Bwd IAT Mean",
        "Bwd IAT Std",
        "Fwd Packets/s",
        "Bwd Packets/s",
        "Min Packet Length",
        "Max Packet Length",
        "Packet Length Mean",
        "Packet Length Std",
        "Active Mean",
        "Active Std",
        "Active Max",
        "Active Min",
        "Idle Mean",
        "Idle Std",
        "Idle Max",
        "Idle Min",
    ],
};

const LOTFOLLAHI_2017: StudyEntry = StudyEntry {
    id: "lotfollahi2017",
    citation: "Lotfollahi et al. (2017) – autoencoder-based encrypted traffic classification.",
    columns: &[
        "Flow Duration",
        "Total Fwd Packets",
        "Total Backward Packets",
        "Flow Bytes/s",
        "Flow Packets/s",
        "Fwd IAT Mean",
        "Fwd IAT Std",
        "Bwd IAT Mean",
        "Bwd IAT Std",
        "Avg Fwd Segment Size",
        "Avg Bwd Segment Size",
        "Init_Win_bytes_forward",
        "Init_Win_bytes_backward",
        "act_data_pkt_fwd",
        "min_seg_size_forward",
        "Active Mean",
        "Idle Mean",
        "Active Max",
        "Idle Max",
    ],
};
