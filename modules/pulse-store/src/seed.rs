use pulse_common::{Category, Event, EventId};

const FESTIVAL_IMAGE: &str = "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";
const JEWELRY_IMAGE: &str = "https://images.pexels.com/photos/1413420/pexels-photo-1413420.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";
const TENNIS_IMAGE: &str = "https://images.pexels.com/photos/8224057/pexels-photo-8224057.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// The events every run starts with.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId(1),
            name: "Live Music Festival".to_string(),
            description: "Experience live music, local food and beverages. Here it is, the 12th edition of our Live Musical Festival! Once again we assembled the most legendary bands in Rock history. Bands like Bar Fighters, Led Slippers and Link Floyd will offer you the show of the century during our three day event. This is the perfect place for spending a nice time with your friends while listening to some of the most iconic rock songs of all times! For any additional information, please contact us at events@yourcompany.com.".to_string(),
            date: "Aug 14".to_string(),
            time: Some("1:30 PM - 5:30 PM".to_string()),
            location: "Silver Auditorium, Ahmedabad, Gujarat".to_string(),
            category: Category::Cultural,
            organizer: "Marc Demo".to_string(),
            contact: Some("+1 555-555-5555".to_string()),
            email: Some("info@yourcompany.com".to_string()),
            image: FESTIVAL_IMAGE.to_string(),
            registration_open: true,
        },
        Event {
            id: EventId(2),
            name: "Jewelry exhibition".to_string(),
            description: "Join us for an exquisite jewelry exhibition showcasing unique handcrafted pieces from local artisans brought together. Discover stunning pieces, from timeless classics to modern treasures.".to_string(),
            date: "Aug 11-12".to_string(),
            time: None,
            location: "Crown Museum, Ahmedabad".to_string(),
            category: Category::Exhibition,
            organizer: "Art Committee".to_string(),
            contact: None,
            email: Some("artshow@ahmedabad.gov.in".to_string()),
            image: JEWELRY_IMAGE.to_string(),
            registration_open: true,
        },
        Event {
            id: EventId(3),
            name: "Tennis Tournament".to_string(),
            description: "Don't miss the excitement of our local tennis tournament! Watch talented players from the community battle it out for the title and a grand prize.".to_string(),
            date: "Jun 22".to_string(),
            time: None,
            location: "Central Courts, Ahmedabad".to_string(),
            category: Category::Sports,
            organizer: "Sports Club".to_string(),
            contact: None,
            email: Some("tennis@sportsclub.org".to_string()),
            image: TENNIS_IMAGE.to_string(),
            registration_open: false,
        },
        Event {
            id: EventId(4),
            name: "Tennis Match".to_string(),
            description: "Don't miss the excitement of our local tennis match! Watch talented players from the community battle it out for the title and a grand prize.".to_string(),
            date: "Jun 25".to_string(),
            time: None,
            location: "Central Courts, Ahmedabad".to_string(),
            category: Category::Sports,
            organizer: "Sports Club".to_string(),
            contact: None,
            email: Some("tennis@sportsclub.org".to_string()),
            image: TENNIS_IMAGE.to_string(),
            registration_open: true,
        },
    ]
}
