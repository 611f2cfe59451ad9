//! Demo data the store starts from on every launch.

use time::macros::{date, time};

use crate::models::{
    Account, Booking, BookingKind, Coordinates, Invoice, InvoiceItem, Notification, NotificationKind,
    Project, ProjectUpdate, Role, SHOWCASE_OWNER, TimelineStage, Transaction, TransactionStatus,
    UpdateKind,
};

fn account(id: &str, name: &str, email: &str, mobile: &str, role: Role, coins: u64, referral: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(email.to_string()),
        mobile: mobile.to_string(),
        role,
        safe_coin_balance: coins,
        referral_code: referral.to_string(),
    }
}

pub fn accounts() -> Vec<Account> {
    vec![
        account("u1", "John Doe", "john.doe@example.com", "1234567890", Role::User, 25500, "JOHN2024"),
        account("a1", "Jane Smith", "jane.smith@example.com", "0987654321", Role::Admin, 0, "JANEADMIN"),
        account("sa1", "Super Admin", "super@example.com", "1122334455", Role::SuperAdmin, 0, "SUPERADMIN"),
    ]
}

fn item(description: &str, amount: u64) -> InvoiceItem {
    InvoiceItem {
        description: description.to_string(),
        amount,
    }
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv1".into(),
            invoice_number: "SC-2024-001".into(),
            date: date!(2024 - 06 - 01),
            due_date: date!(2024 - 06 - 15),
            items: vec![item("Foundation Stage Payment", 50000), item("Material Surcharge", 2500)],
            total_amount: 52500,
            status: TransactionStatus::Paid,
        },
        Invoice {
            id: "inv2".into(),
            invoice_number: "SC-2024-002".into(),
            date: date!(2024 - 07 - 10),
            due_date: date!(2024 - 07 - 25),
            items: vec![item("Structural Work Payment", 75000)],
            total_amount: 75000,
            status: TransactionStatus::Paid,
        },
        Invoice {
            id: "inv3".into(),
            invoice_number: "SC-2024-003".into(),
            date: date!(2024 - 08 - 01),
            due_date: date!(2024 - 08 - 15),
            items: vec![item("Flooring & Tiling Advance", 30000)],
            total_amount: 30000,
            status: TransactionStatus::Pending,
        },
        Invoice {
            id: "inv4".into(),
            invoice_number: "SC-2024-004".into(),
            date: date!(2024 - 08 - 08),
            due_date: date!(2024 - 08 - 22),
            items: vec![item("Interior Work Advance Payment", 40000)],
            total_amount: 40000,
            status: TransactionStatus::Pending,
        },
    ]
}

fn transactions() -> Vec<Transaction> {
    let tx = |id: &str, date, description: &str, amount, status, invoice_id: &str| Transaction {
        id: id.to_string(),
        date,
        description: description.to_string(),
        amount,
        status,
        invoice_id: invoice_id.to_string(),
        proof_url: None,
    };
    let mut awaiting = tx(
        "tr4",
        date!(2024 - 08 - 10),
        "Interior work advance",
        40000,
        TransactionStatus::AwaitingApproval,
        "inv4",
    );
    awaiting.proof_url = Some("https://picsum.photos/seed/proof1/400/300".to_string());
    vec![
        tx("tr1", date!(2024 - 06 - 05), "Payment for Foundation", 52500, TransactionStatus::Paid, "inv1"),
        tx("tr2", date!(2024 - 07 - 12), "Payment for Structural Work", 75000, TransactionStatus::Paid, "inv2"),
        tx("tr3", date!(2024 - 08 - 02), "Advance for Flooring", 30000, TransactionStatus::Pending, "inv3"),
        awaiting,
    ]
}

fn images(project: &str) -> Vec<String> {
    (1..=3)
        .map(|n| format!("https://picsum.photos/seed/{project}-{n}/800/600"))
        .collect()
}

fn update(id: &str, kind: UpdateKind, url: Option<&str>, caption: &str, date: time::Date) -> ProjectUpdate {
    ProjectUpdate {
        id: id.to_string(),
        kind,
        url: url.map(str::to_string),
        caption: caption.to_string(),
        date,
        author: "Jane Smith".to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".into(),
            user_id: "u1".into(),
            name: "Skyline Towers".into(),
            location: "Downtown, Metropolis".into(),
            builder: "Constructo Corp.".into(),
            description: "A luxurious new residential complex offering stunning city views and state-of-the-art amenities. This project is a fresh construction from the ground up, featuring a rooftop pool, gym, and 24/7 security.".into(),
            images: images("p1"),
            timeline: vec![
                TimelineStage::new("t1-1", "Foundation", 100),
                TimelineStage::new("t1-2", "Structural Work", 100),
                TimelineStage::new("t1-3", "Flooring & Tiling", 60),
                TimelineStage::new("t1-4", "Finishing Touches", 0),
                TimelineStage::new("t1-5", "Completion", 0),
            ],
            updates: vec![
                update("u1-1", UpdateKind::Photo, Some("https://picsum.photos/seed/update1/400/300"), "Flooring work started on the 5th floor.", date!(2024 - 07 - 20)),
                update("u1-2", UpdateKind::Note, None, "Material delivery scheduled for tomorrow morning.", date!(2024 - 07 - 19)),
                update("u1-3", UpdateKind::Video, Some("https://picsum.photos/seed/video1/400/300"), "Drone footage of the completed structure.", date!(2024 - 07 - 15)),
            ],
            coords: Coordinates::new(37.7749, -122.4194),
            transactions: transactions(),
        },
        Project {
            id: "p2".into(),
            user_id: "u1".into(),
            name: "Greenwood Villas".into(),
            location: "Suburbia, Green Valley".into(),
            builder: "EcoBuild Homes".into(),
            description: "Eco-friendly villas nestled in nature, built as a completely new development. These homes are designed for sustainable living with solar panels, rainwater harvesting, and lush green surroundings. No renovation or modification work is undertaken.".into(),
            images: images("p2"),
            timeline: vec![
                TimelineStage::new("t2-1", "Foundation", 100),
                TimelineStage::new("t2-2", "Structural Work", 85),
                TimelineStage::new("t2-3", "Interior Works", 10),
                TimelineStage::new("t2-4", "Landscaping", 0),
            ],
            updates: vec![update(
                "u2-1",
                UpdateKind::Photo,
                Some("https://picsum.photos/seed/update2/400/300"),
                "Roofing is nearly complete!",
                date!(2024 - 07 - 21),
            )],
            coords: Coordinates::new(34.0522, -118.2437),
            transactions: Vec::new(),
        },
        Project {
            id: "p3".into(),
            user_id: SHOWCASE_OWNER.into(),
            name: "Ocean Breeze Condos".into(),
            location: "Sunny Isles, Florida".into(),
            builder: "Coastal Homes Inc.".into(),
            description: "A stunning beachfront property offering unparalleled ocean views. This is a showcase project managed by our admin team, featuring modern architecture and luxurious amenities. It is a fresh construction from the ground up.".into(),
            images: images("p3"),
            timeline: vec![
                TimelineStage::new("t3-1", "Site Preparation", 100),
                TimelineStage::new("t3-2", "Foundation Pouring", 100),
                TimelineStage::new("t3-3", "Exterior Framing", 70),
                TimelineStage::new("t3-4", "Interior Finishes", 0),
            ],
            updates: vec![update(
                "u3-1",
                UpdateKind::Photo,
                Some("https://picsum.photos/seed/update3/400/300"),
                "Exterior framing for the east wing is progressing well.",
                date!(2024 - 07 - 22),
            )],
            coords: Coordinates::new(25.9415, -80.1221),
            transactions: Vec::new(),
        },
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![Booking {
        id: "b1".into(),
        kind: BookingKind::SiteVisit,
        project_id: Some("p1".into()),
        project_name: "Skyline Towers".into(),
        date: date!(2024 - 08 - 05),
        time: time!(11:00),
    }]
}

fn notification(id: &str, kind: NotificationKind, title: &str, message: &str, timestamp: &str, read: bool, project: Option<&str>) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        read,
        project_id: project.map(str::to_string),
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        notification("n1", NotificationKind::ProjectUpdate, "Progress on Skyline Towers", "The flooring and tiling stage is now 80% complete.", "30 mins ago", false, Some("p1")),
        notification("n2", NotificationKind::PaymentReminder, "Invoice Due Soon", "Your payment for invoice SC-2024-003 is due in 3 days.", "2 hours ago", false, Some("p1")),
        notification("n3", NotificationKind::GeneralAnnouncement, "System Maintenance", "We will be undergoing scheduled maintenance this Saturday from 2 AM to 4 AM.", "3 days ago", true, None),
        notification("n4", NotificationKind::ProjectUpdate, "Update on Greenwood Villas", "Structural work is now 95% complete. Interior work is set to begin next week.", "4 days ago", true, Some("p2")),
    ]
}
