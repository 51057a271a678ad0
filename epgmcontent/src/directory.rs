//! Branch directory
//!
//! Contact cards for the ministry's branches. Each card carries the
//! human-readable address plus the raw phone numbers the link builders in
//! [`crate::links`] turn into `tel:` and WhatsApp URLs.

use serde::Serialize;

/// A phone contact on a branch card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PhoneContact {
    /// Display label ("Call", "WhatsApp", ...)
    pub label: &'static str,
    /// Number in international format, spaces allowed
    pub number: &'static str,
    /// Whether the number is reachable over WhatsApp
    pub whatsapp: bool,
}

/// A ministry branch contact card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BranchCard {
    /// Stable identifier
    pub id: &'static str,
    /// Branch display title
    pub title: &'static str,
    /// Name of the overseeing ministry
    pub ministry: &'static str,
    /// Street address
    pub address: &'static str,
    /// Ghana Post GPS digital address, when the branch has one
    pub gps_address: Option<&'static str>,
    /// Contact numbers
    pub phones: &'static [PhoneContact],
}

/// The ministry's branches
pub const BRANCHES: &[BranchCard] = &[
    BranchCard {
        id: "ghana",
        title: "Ghana Branch",
        ministry: "Bishop Peter Ababio Ministries",
        address: "Proton St, Weija–Gbawe",
        gps_address: Some("GS-0137-9154"),
        phones: &[
            PhoneContact {
                label: "WhatsApp",
                number: "+233 24 849 0953",
                whatsapp: true,
            },
            PhoneContact {
                label: "Call",
                number: "+233 24 456 2322",
                whatsapp: false,
            },
        ],
    },
    BranchCard {
        id: "italy",
        title: "Italy Branch",
        ministry: "Bishop Peter Ababio Ministries",
        address: "Brescia, Italy",
        gps_address: None,
        phones: &[PhoneContact {
            label: "WhatsApp",
            number: "+39 389 540 3600",
            whatsapp: true,
        }],
    },
];

/// Find a branch card by its identifier
pub fn branch_by_id(id: &str) -> Option<&'static BranchCard> {
    BRANCHES.iter().find(|b| b.id == id)
}
