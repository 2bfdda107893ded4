//! Seed data handed to the stores and screens at construction.
//!
//! Everything here is static; ETA and distance values are display strings.

use crate::model::{Bus, EntityId, LatLon, NotificationId, PlaceId, SearchResultId, Stop};
use crate::notifications::{Notification, NotificationKind, Priority};
use crate::saved_places::{PlaceKind, SavedPlace};
use crate::search::{Destination, ResultKind, SearchResult};

fn stop(id: &str, name: &str, lat: f64, lng: f64, eta: &str, distance: &str) -> Stop {
    Stop {
        id: EntityId::new(id),
        name: name.into(),
        position: LatLon { lat, lng },
        eta: eta.into(),
        distance: distance.into(),
    }
}

pub fn stops() -> Vec<Stop> {
    vec![
        stop("1", "University Main Gate", 40.7128, -74.0060, "3 min", "0.2 km"),
        stop("2", "Student Center", 40.7150, -74.0040, "7 min", "0.5 km"),
        stop("3", "Library Plaza", 40.7170, -74.0020, "12 min", "0.8 km"),
        stop("4", "Sports Complex", 40.7190, -74.0000, "15 min", "1.2 km"),
        stop("5", "Medical Center", 40.7210, -73.9980, "18 min", "1.5 km"),
    ]
}

pub fn buses() -> Vec<Bus> {
    vec![
        Bus {
            id: EntityId::new("bus-1"),
            name: "Campus Express".into(),
            position: LatLon { lat: 40.7140, lng: -74.0050 },
            eta: "5 min".into(),
            distance: "0.3 km".into(),
            route: "Route A".into(),
            next_stop: "Student Center".into(),
        },
        Bus {
            id: EntityId::new("bus-2"),
            name: "Medical Shuttle".into(),
            position: LatLon { lat: 40.7180, lng: -74.0010 },
            eta: "8 min".into(),
            distance: "0.7 km".into(),
            route: "Route B".into(),
            next_stop: "Sports Complex".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    time: &str,
    route: Option<&str>,
    stop: Option<&str>,
    read: bool,
    priority: Priority,
) -> Notification {
    Notification {
        id: NotificationId::new(id),
        kind,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        route: route.map(Into::into),
        stop: stop.map(Into::into),
        read,
        priority,
    }
}

/// Two unread, three read.
pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            NotificationKind::Delay,
            "Route A Delayed",
            "Bus running 8 minutes late due to traffic congestion on Queen Street",
            "5 minutes ago",
            Some("Route A"),
            Some("University Main Gate"),
            false,
            Priority::High,
        ),
        notification(
            "2",
            NotificationKind::Arrival,
            "Bus Arriving Soon",
            "Campus Express arriving at Student Center in 2 minutes",
            "10 minutes ago",
            Some("Route A"),
            Some("Student Center"),
            false,
            Priority::Medium,
        ),
        notification(
            "3",
            NotificationKind::Service,
            "Service Update",
            "Route B will have reduced frequency this weekend due to maintenance",
            "2 hours ago",
            Some("Route B"),
            None,
            true,
            Priority::Medium,
        ),
        notification(
            "4",
            NotificationKind::Info,
            "New Route Available",
            "Route D now serves the new Science Building. Check updated schedules.",
            "1 day ago",
            Some("Route D"),
            None,
            true,
            Priority::Low,
        ),
        notification(
            "5",
            NotificationKind::Delay,
            "Temporary Stop Closure",
            "Library Plaza stop closed until 3 PM due to construction",
            "2 days ago",
            None,
            Some("Library Plaza"),
            true,
            Priority::High,
        ),
    ]
}

fn routes(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

pub fn saved_places() -> Vec<SavedPlace> {
    vec![
        SavedPlace {
            id: PlaceId::new("1"),
            kind: PlaceKind::Stop,
            name: "University Main Gate".into(),
            subtitle: "Most frequently used stop".into(),
            eta: Some("3 min".into()),
            distance: "0.2 km".into(),
            routes: routes(&["Route A", "Route B", "Route C"]),
            last_used: "2 hours ago".into(),
            alerts: true,
        },
        SavedPlace {
            id: PlaceId::new("2"),
            kind: PlaceKind::Route,
            name: "Route A - Campus Express".into(),
            subtitle: "Your daily commute route".into(),
            eta: None,
            distance: "45 min journey".into(),
            routes: routes(&["Route A"]),
            last_used: "Yesterday".into(),
            alerts: true,
        },
        SavedPlace {
            id: PlaceId::new("3"),
            kind: PlaceKind::Stop,
            name: "Student Center".into(),
            subtitle: "Weekend favorite".into(),
            eta: Some("7 min".into()),
            distance: "0.5 km".into(),
            routes: routes(&["Route A", "Route C"]),
            last_used: "3 days ago".into(),
            alerts: false,
        },
        SavedPlace {
            id: PlaceId::new("4"),
            kind: PlaceKind::Stop,
            name: "Medical Center".into(),
            subtitle: "Emergency services".into(),
            eta: Some("18 min".into()),
            distance: "1.5 km".into(),
            routes: routes(&["Route B"]),
            last_used: "1 week ago".into(),
            alerts: true,
        },
    ]
}

pub fn search_catalog() -> Vec<SearchResult> {
    vec![
        SearchResult {
            id: SearchResultId::new("1"),
            kind: ResultKind::Stop,
            name: "University Main Gate".into(),
            subtitle: "Bus Stop • 5 routes available".into(),
            eta: Some("3 min".into()),
            distance: "0.2 km".into(),
            routes: routes(&["Route A", "Route B", "Route C"]),
        },
        SearchResult {
            id: SearchResultId::new("2"),
            kind: ResultKind::Route,
            name: "Route A - Campus Express".into(),
            subtitle: "University → CBD → Airport".into(),
            eta: None,
            distance: "45 min journey".into(),
            routes: routes(&["Route A"]),
        },
        SearchResult {
            id: SearchResultId::new("3"),
            kind: ResultKind::Address,
            name: "123 Queen Street, Auckland CBD".into(),
            subtitle: "Downtown Auckland".into(),
            eta: None,
            distance: "12 km".into(),
            routes: routes(&["Route A", "Route B"]),
        },
        SearchResult {
            id: SearchResultId::new("4"),
            kind: ResultKind::Stop,
            name: "Student Center Plaza".into(),
            subtitle: "Bus Stop • 3 routes available".into(),
            eta: Some("7 min".into()),
            distance: "0.5 km".into(),
            routes: routes(&["Route A", "Route C"]),
        },
    ]
}

pub fn recent_searches() -> Vec<String> {
    routes(&[
        "University Main Gate",
        "Student Center",
        "Medical Center",
        "Sports Complex",
    ])
}

pub fn popular_destinations() -> Vec<Destination> {
    let destination = |name: &str, subtitle: &str, distance: &str, labels: &[&str]| Destination {
        name: name.into(),
        subtitle: subtitle.into(),
        distance: distance.into(),
        routes: routes(labels),
    };
    vec![
        destination("Auckland CBD", "Downtown Area", "12 km", &["Route A", "Route B"]),
        destination(
            "Airport Terminal",
            "International & Domestic",
            "25 km",
            &["Airport Express"],
        ),
        destination("Sylvia Park", "Shopping Centre", "8 km", &["Route C"]),
        destination("Newmarket", "Transport Hub", "6 km", &["Route A", "Route D"]),
    ]
}
