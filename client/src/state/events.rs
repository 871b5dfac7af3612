//! Event listings and the event-type filter.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Conference,
    Workshop,
    Hackathon,
    Networking,
    Training,
    Bootcamp,
}

impl EventType {
    pub const ALL: [Self; 6] =
        [Self::Conference, Self::Workshop, Self::Hackathon, Self::Networking, Self::Training, Self::Bootcamp];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::Workshop => "Workshop",
            Self::Hackathon => "Hackathon",
            Self::Networking => "Networking",
            Self::Training => "Training",
            Self::Bootcamp => "Bootcamp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub kind: EventType,
    pub attendees: u32,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PastEvent {
    pub title: &'static str,
    pub attendees: u32,
    pub date: &'static str,
    pub kind: EventType,
}

pub static UPCOMING_EVENTS: [Event; 6] = [
    Event {
        title: "AI India Summit 2026",
        description: "India's premier AI conference bringing together researchers, practitioners, and industry leaders.",
        date: "March 15-17, 2026",
        time: "9:00 AM - 6:00 PM",
        location: "Bangalore International Exhibition Centre",
        kind: EventType::Conference,
        attendees: 5000,
        featured: true,
    },
    Event {
        title: "Cloud Architecture Workshop",
        description: "Hands-on workshop on designing scalable cloud solutions with AWS, Azure, and GCP.",
        date: "February 25, 2026",
        time: "10:00 AM - 4:00 PM",
        location: "Virtual Event",
        kind: EventType::Workshop,
        attendees: 200,
        featured: false,
    },
    Event {
        title: "Cybersecurity Hackathon",
        description: "48-hour hackathon focused on building security tools and finding vulnerabilities.",
        date: "March 5-7, 2026",
        time: "48 Hours",
        location: "Mumbai Tech Hub",
        kind: EventType::Hackathon,
        attendees: 300,
        featured: false,
    },
    Event {
        title: "Women in Tech Leadership",
        description: "Networking and mentorship event for women pursuing leadership roles in technology.",
        date: "March 8, 2026",
        time: "2:00 PM - 7:00 PM",
        location: "Delhi NCR",
        kind: EventType::Networking,
        attendees: 150,
        featured: false,
    },
    Event {
        title: "DevOps Deep Dive",
        description: "Advanced training on Kubernetes, Docker, and CI/CD pipelines.",
        date: "February 28, 2026",
        time: "9:00 AM - 5:00 PM",
        location: "Hyderabad Convention Center",
        kind: EventType::Training,
        attendees: 100,
        featured: false,
    },
    Event {
        title: "Data Science Bootcamp",
        description: "Intensive 3-day bootcamp covering Python, ML, and data visualization.",
        date: "March 20-22, 2026",
        time: "9:00 AM - 6:00 PM",
        location: "Chennai Tech Park",
        kind: EventType::Bootcamp,
        attendees: 75,
        featured: false,
    },
];

pub static PAST_EVENTS: [PastEvent; 3] = [
    PastEvent { title: "India Tech Summit 2025", attendees: 8000, date: "December 2025", kind: EventType::Conference },
    PastEvent { title: "AI for Good Hackathon", attendees: 450, date: "November 2025", kind: EventType::Hackathon },
    PastEvent { title: "Cloud Native Workshop Series", attendees: 1200, date: "October 2025", kind: EventType::Workshop },
];

/// Headline counts per format, shown above the listings.
pub const EVENT_FORMATS: [(&str, u32); 4] =
    [("Conferences", 12), ("Workshops", 24), ("Webinars", 50), ("Hackathons", 8)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventsState {
    /// `None` shows every type.
    pub filter: Option<EventType>,
}

impl EventsState {
    /// The highlighted event, shown above the filter regardless of it.
    #[must_use]
    pub fn featured(&self) -> Option<&'static Event> {
        UPCOMING_EVENTS.iter().find(|event| event.featured)
    }

    /// Non-featured upcoming events matching the filter.
    #[must_use]
    pub fn listed(&self) -> Vec<&'static Event> {
        UPCOMING_EVENTS
            .iter()
            .filter(|event| !event.featured)
            .filter(|event| self.filter.is_none_or(|kind| event.kind == kind))
            .collect()
    }
}

/// Attendance figure as printed on cards: `5,000`.
#[must_use]
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
