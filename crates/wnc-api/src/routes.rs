// RESTCONF resource paths, relative to `/restconf/data/` (or
// `/restconf/operations/` for RPCs).
//
// Each top-level path names a `{yang-module}:{container}`; the response
// document wraps its payload in exactly that key.

/// Append a YANG list key: `{path}={key}`, percent-encoding reserved
/// characters in the key (RFC 8040 §3.5.3).
pub fn with_key(path: &str, key: &str) -> String {
    format!("{path}={}", urlencoding::encode(key))
}

/// Append a child node to a path.
pub fn child(path: &str, node: &str) -> String {
    format!("{path}/{node}")
}

// ── Access points ────────────────────────────────────────────────────

pub mod ap {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data";
    pub const CAPWAP_DATA: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/capwap-data";
    pub const NAME_MAC_MAP: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/ap-name-mac-map";
    pub const RADIO_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/radio-oper-data";
    pub const GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-ap-global-oper:ap-global-oper-data";
    pub const CFG: &str = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data";
    pub const TAG_SOURCE_PRIORITY_CONFIGS: &str =
        "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data/tag-source-priority-configs";

    /// RPC: reset (reload) a single AP.
    pub const RPC_RESET: &str = "Cisco-IOS-XE-wireless-access-point-cmd-rpc:ap-reset";
    /// RPC: enable or disable an AP.
    pub const RPC_SET_ADMIN_STATE: &str =
        "Cisco-IOS-XE-wireless-access-point-cfg-rpc:set-ap-admin-state";
}

// ── Wireless clients ─────────────────────────────────────────────────

pub mod client {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-client-oper:client-oper-data";
    pub const COMMON_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-client-oper:client-oper-data/common-oper-data";
    pub const DOT11_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-client-oper:client-oper-data/dot11-oper-data";
    pub const GLOBAL_OPER: &str =
        "Cisco-IOS-XE-wireless-client-global-oper:client-global-oper-data";
}

// ── Controller-wide ──────────────────────────────────────────────────

pub mod general {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-general-oper:general-oper-data";
    pub const MGMT_INTF_DATA: &str =
        "Cisco-IOS-XE-wireless-general-oper:general-oper-data/mgmt-intf-data";
    pub const CFG: &str = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data";
}

// ── Radio resource management ────────────────────────────────────────

pub mod rrm {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data";
    pub const GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-rrm-global-oper:rrm-global-oper-data";
    pub const CFG: &str = "Cisco-IOS-XE-wireless-rrm-cfg:rrm-cfg-data";
}

// ── WLANs ────────────────────────────────────────────────────────────

pub mod wlan {
    pub const CFG: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data";
    pub const CFG_ENTRIES: &str =
        "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries";
    pub const CFG_ENTRY: &str =
        "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries/wlan-cfg-entry";
    pub const GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data";
}

// ── Rogue detection ──────────────────────────────────────────────────

pub mod rogue {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data";
    pub const STATS: &str = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data/rogue-stats";
}

// ── Sites and tags ───────────────────────────────────────────────────

pub mod site {
    pub const CFG: &str = "Cisco-IOS-XE-wireless-site-cfg:site-cfg-data";
    pub const SITE_TAG_CONFIGS: &str =
        "Cisco-IOS-XE-wireless-site-cfg:site-cfg-data/site-tag-configs";
}

// ── Cisco Spaces connector ───────────────────────────────────────────

pub mod spaces {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-cisco-spaces-oper:cisco-spaces-oper-data";
    pub const CONNECTION_DETAIL: &str =
        "Cisco-IOS-XE-wireless-cisco-spaces-oper:cisco-spaces-oper-data/spaces-connection-detail";
}

// ── Ultra-Reliable Wireless Backhaul ─────────────────────────────────

pub mod urwb {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-urwbnet-oper:urwbnet-oper-data";
    pub const CFG: &str = "Cisco-IOS-XE-wireless-urwbnet-cfg:urwbnet-cfg-data";
}
