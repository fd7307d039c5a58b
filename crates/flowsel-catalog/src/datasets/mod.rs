//! Compiled-in dataset definitions, one module per dataset group.

mod cic_ids;
mod unsw_nb15;
mod vpn_nonvpn;

use crate::model::DatasetEntry;

/// All datasets in listing order.
pub(crate) const DATASETS: &[DatasetEntry] = &[
    cic_ids::DATASET,
    unsw_nb15::DATASET,
    vpn_nonvpn::DATASET,
];
