// src/scotland.rs
//! The fixed reference set of Scottish parliamentary constituencies.
//!
//! Matching is exact: case- and whitespace-sensitive, no diacritic
//! normalization. An upstream rename silently classifies a seat as
//! rest-of-UK; that mirrors the behavior of the upstream feed's
//! consumers and is intentional.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The 59 Scottish constituency names, as spelled in the petition feed.
pub const SCOTTISH_CONSTITUENCIES: &[&str] = &[
    "Na h-Eileanan an Iar",
    "Orkney and Shetland",
    "Dundee West",
    "Glenrothes",
    "Caithness, Sutherland and Easter Ross",
    "Glasgow North East",
    "Edinburgh East",
    "Ross, Skye and Lochaber",
    "Glasgow North",
    "Dundee East",
    "Aberdeen North",
    "Glasgow Central",
    "Kirkcaldy and Cowdenbeath",
    "Midlothian",
    "Angus",
    "Paisley and Renfrewshire South",
    "West Dunbartonshire",
    "Glasgow South",
    "Kilmarnock and Loudoun",
    "Inverclyde",
    "Motherwell and Wishaw",
    "Glasgow South West",
    "Cumbernauld, Kilsyth and Kirkintilloch East",
    "Glasgow North West",
    "Coatbridge, Chryston and Bellshill",
    "Glasgow East",
    "North East Fife",
    "Dumfries and Galloway",
    "Dumfriesshire, Clydesdale and Tweeddale",
    "Berwickshire, Roxburgh and Selkirk",
    "Inverness, Nairn, Badenoch and Strathspey",
    "North Ayrshire and Arran",
    "Airdrie and Shotts",
    "Moray",
    "Dunfermline and West Fife",
    "Perth and North Perthshire",
    "Banff and Buchan",
    "Falkirk",
    "Ayr, Carrick and Cumnock",
    "Central Ayrshire",
    "Stirling",
    "Edinburgh South West",
    "Edinburgh South",
    "Argyll and Bute",
    "Livingston",
    "Aberdeen South",
    "East Lothian",
    "Lanark and Hamilton East",
    "Paisley and Renfrewshire North",
    "East Kilbride, Strathaven and Lesmahagow",
    "Rutherglen and Hamilton West",
    "Ochil and South Perthshire",
    "Gordon",
    "West Aberdeenshire and Kincardine",
    "East Dunbartonshire",
    "Linlithgow and East Falkirk",
    "Edinburgh West",
    "East Renfrewshire",
    "Edinburgh North and Leith",
];

static SCOTTISH_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SCOTTISH_CONSTITUENCIES.iter().copied().collect());

/// Exact membership test against the Scottish constituency list.
#[must_use]
pub fn is_scottish(name: &str) -> bool {
    SCOTTISH_SET.contains(name)
}
