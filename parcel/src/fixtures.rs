#![allow(clippy::excessive_precision)]

use crate::Parcel;

/// The six-corner Waldrain parcel with its taped edge lengths and area.
pub(crate) fn waldrain() -> Parcel {
    Parcel::builder()
        .vertex("NW", 47.61240287934088, 7.668455564143808)
        .vertex("NO", 47.61238603493116, 7.66886803694362)
        .vertex("OM", 47.61227235282722, 7.668805013356426)
        .vertex("SO", 47.612081232450755, 7.668710772100395)
        .vertex("SW", 47.61209766306042, 7.668317607008359)
        .vertex("WM", 47.612263038360155, 7.668392271613928)
        .edge_lengths([31.10, 13.34, 22.51, 29.63, 19.26, 16.24])
        .area(1043.0)
        .build()
        .unwrap()
}
