use crate::model::{DatasetEntry, StudyEntry};

pub(super) const DATASET: DatasetEntry = DatasetEntry {
    id: "unsw-nb15",
    source: "Data/UNSW-NB15/UNSW-NB15_trainset.csv",
    studies: &[MOUSTAFA_2015_FULL, ZHOU_2020_TOP12],
};

const MOUSTAFA_2015_FULL: StudyEntry = StudyEntry {
    id: "moustafa2015_full",
    citation: "Moustafa & Slay (2015) – UNSW-NB15 49 feature baseline.",
    columns: &[
        "dur",
        "spkts",
        "dpkts",
        "sbytes",
        "dbytes",
        "rate",
        "sttl",
        "dttl",
        "sload",
        "dload",
        "sloss",
        "dloss",
        "sinpkt",
        "dinpkt",
        "sjit",
        "djit",
        "swin",
        "stcpb",
        "dtcpb",
        "dwin",
        "tcprtt",
        "synack",
        "ackdat",
        "smean",
        "dmean",
        "trans_depth",
        "response_body_len",
        "ct_srv_src",
        "ct_state_ttl",
        "ct_dst_ltm",
        "ct_src_dport_ltm",
        "ct_dst_sport_ltm",
        "ct_dst_src_ltm",
        "is_ftp_login",
        "ct_ftp_cmd",
        "ct_flw_http_mthd",
        "ct_src_ltm",
        "ct_srv_dst",
        "is_sm_ips_ports",
    ],
};

const ZHOU_2020_TOP12: StudyEntry = StudyEntry {
    id: "zhou2020_top12",
    citation: "Zhou et al. (2020) – top-12 UNSW-NB15 flow/meta features.",
    columns: &[
        "dur",
        "spkts",
        "dpkts",
        "sbytes",
        "dbytes",
        "rate",
        "sttl",
        "dttl",
        "sload",
        "dload",
        "ct_state_ttl",
        "ct_srv_dst",
    ],
};
