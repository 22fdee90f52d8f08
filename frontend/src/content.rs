// Static copy and listings shown on the resort page.

use crate::carousel::{Rating, Testimonial};

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Rajesh & Priya Sharma",
        location: "Bangalore",
        rating: Rating::MAX,
        text: "J&L Kabini Palace exceeded all our expectations. The perfect blend of luxury and nature made our anniversary unforgettable. The staff's attention to detail and the serene environment created memories we'll treasure forever.",
        experience: "Anniversary Celebration",
    },
    Testimonial {
        id: 2,
        name: "Michael & Sarah Johnson",
        location: "London, UK",
        rating: Rating::MAX,
        text: "As international travelers, we've stayed at many resorts, but Kabini Palace is truly special. The authentic farm-style experience combined with luxury amenities gave us the perfect insight into Karnataka's natural beauty.",
        experience: "International Vacation",
    },
    Testimonial {
        id: 3,
        name: "Dr. Anitha Reddy",
        location: "Hyderabad",
        rating: Rating::MAX,
        text: "The tranquility here is therapeutic. After months of busy hospital schedules, this resort provided the perfect escape. The morning walks by the pond and forest trekking refreshed my soul completely.",
        experience: "Solo Retreat",
    },
    Testimonial {
        id: 4,
        name: "The Kumar Family",
        location: "Chennai",
        rating: Rating::MAX,
        text: "Our children had the time of their lives! The jeep safari was thrilling, and the natural pond was their favorite spot. It's rare to find a place that caters perfectly to both adults and children.",
        experience: "Family Vacation",
    },
    Testimonial {
        id: 5,
        name: "James & Emma Wilson",
        location: "Melbourne, Australia",
        rating: Rating::MAX,
        text: "We came for our honeymoon and were blown away by the romantic ambiance. The Empress Suite with its jacuzzi overlooking the forest was magical. The sunset dinners by the pond were absolutely perfect.",
        experience: "Honeymoon",
    },
];

pub const GUEST_STATS: &[(&str, &str)] = &[
    ("500+", "Happy Guests"),
    ("4.9", "Average Rating"),
    ("95%", "Return Rate"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomCategory {
    Luxury,
    Premium,
    Standard,
    Family,
}

impl RoomCategory {
    pub fn label(self) -> &'static str {
        match self {
            RoomCategory::Luxury => "Luxury",
            RoomCategory::Premium => "Premium",
            RoomCategory::Standard => "Standard",
            RoomCategory::Family => "Family",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            RoomCategory::Luxury => "badge-luxury",
            RoomCategory::Premium => "badge-premium",
            RoomCategory::Standard => "badge-standard",
            RoomCategory::Family => "badge-family",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub category: RoomCategory,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
}

pub const ROOMS: &[Room] = &[
    Room {
        id: "110",
        name: "The King's Grove",
        kind: "Hut",
        category: RoomCategory::Premium,
        description: "Royal experience in a traditional hut setting with modern amenities",
        features: &["Forest View", "Private Deck", "Rustic Luxury"],
        image: "kings.jpg",
        icon: "👑",
        price: "₹15,000",
    },
    Room {
        id: "105",
        name: "The Empress Suite",
        kind: "Main Building - First Floor",
        category: RoomCategory::Luxury,
        description: "Ultimate luxury with private jacuzzi and panoramic forest views",
        features: &["Jacuzzi", "Premium Suite", "Balcony"],
        image: "empress.jpg",
        icon: "🌊",
        price: "₹13,000",
    },
    Room {
        id: "104",
        name: "Regal Crest",
        kind: "Main Building - First Floor",
        category: RoomCategory::Premium,
        description: "Elevated comfort with regal interiors and forest panorama",
        features: &["First Floor", "Forest View", "Royal Decor"],
        image: "regal.jpg",
        icon: "👑",
        price: "₹10,000",
    },
    Room {
        id: "102",
        name: "Sterling Manor",
        kind: "Main Building - Ground Floor",
        category: RoomCategory::Standard,
        description: "Comfortable elegance with easy access and modern conveniences",
        features: &["Ground Floor", "Garden Access", "Modern Amenities"],
        image: "sterling.jpg",
        icon: "📍",
        price: "₹7,500",
    },
    Room {
        id: "103",
        name: "Imperial Ridge",
        kind: "Main Building - Ground Floor",
        category: RoomCategory::Standard,
        description: "Spacious accommodation with imperial charm and comfort",
        features: &["Ground Floor", "Spacious", "Classic Design"],
        image: "imperial.jpg",
        icon: "👑",
        price: "₹6,000",
    },
    Room {
        id: "101",
        name: "The Earl's Retreat",
        kind: "Special",
        category: RoomCategory::Premium,
        description: "Private retreat offering intimate luxury and personalized service",
        features: &["Private", "Exclusive", "Personalized Service"],
        image: "luxury-room.jpg",
        icon: "👑",
        price: "₹5,000",
    },
    Room {
        id: "106",
        name: "Verdant Vista",
        kind: "Entrance Side",
        category: RoomCategory::Standard,
        description: "Fresh perspectives with lush green views and modern comfort",
        features: &["Green Views", "Fresh Air", "Modern"],
        image: "luxury-room.jpg",
        icon: "📍",
        price: "₹6,000",
    },
    Room {
        id: "107",
        name: "Laurel Horizon",
        kind: "Entrance Side",
        category: RoomCategory::Standard,
        description: "Horizon views with contemporary design and natural ambiance",
        features: &["Horizon View", "Contemporary", "Natural"],
        image: "luxury-room.jpg",
        icon: "📍",
        price: "₹6,000",
    },
    Room {
        id: "108",
        name: "Emerald Outlook",
        kind: "Entrance Side",
        category: RoomCategory::Family,
        description: "Perfect for families with double beds and emerald forest views",
        features: &["Double Beds", "Family Friendly", "Forest Views"],
        image: "luxury-room.jpg",
        icon: "👪",
        price: "₹7,500",
    },
];

pub struct Facility {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
}

pub const FACILITIES: &[Facility] = &[
    Facility {
        icon: "🌊",
        title: "Natural Pond",
        description: "Crystal clear waters surrounded by lush greenery, perfect for peaceful reflection and connecting with nature's tranquility.",
        image: "natural-pond.jpg",
        accent: "accent-river",
    },
    Facility {
        icon: "🌲",
        title: "Forest Trekking with Guide",
        description: "Explore the mystical forest trails with our experienced guides who share the secrets of the wild.",
        image: "forest-trekking.jpg",
        accent: "accent-forest",
    },
    Facility {
        icon: "🚙",
        title: "Jeep Safari",
        description: "Venture deep into the wilderness and witness exotic wildlife in their natural habitat with our safari adventures.",
        image: "jeep-safari.jpg",
        accent: "accent-earth",
    },
    Facility {
        icon: "🍽️",
        title: "Restaurant",
        description: "Savor authentic local cuisine and international delicacies prepared with fresh, organic ingredients.",
        image: "luxury-restaurant.jpg",
        accent: "accent-sunset",
    },
    Facility {
        icon: "🏛️",
        title: "Function Hall",
        description: "Host memorable events in our elegant function hall with stunning forest views and premium amenities.",
        image: "luxury-function-hall.jpg",
        accent: "accent-forest-deep",
    },
];

pub const ABOUT_FEATURES: &[(&str, &str, &str)] = &[
    ("📍", "Prime Location", "Nestled beside the pristine Kabini river with direct forest access"),
    ("❤️", "Luxury Comfort", "Modern amenities seamlessly blended with rustic charm"),
    ("⭐", "Unique Experience", "Farm-style living meets premium hospitality"),
    ("🍃", "Eco-Friendly", "Sustainable practices that respect and preserve nature"),
];

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
    pub span: &'static str,
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { src: "gallery1.jpg", alt: "Forest Resort Overview", category: "Resort", span: "span-wide span-tall" },
    GalleryImage { src: "gallery2.jpg", alt: "Natural Pond", category: "Facilities", span: "" },
    GalleryImage { src: "gallery3.jpg", alt: "Forest Trekking", category: "Activities", span: "" },
    GalleryImage { src: "jeep-safari.jpg", alt: "Jeep Safari Adventure", category: "Activities", span: "" },
    GalleryImage { src: "luxury-room.jpg", alt: "Luxury Room Interior", category: "Rooms", span: "" },
    GalleryImage { src: "gallery1.jpg", alt: "Sunset by the River", category: "Nature", span: "span-wide" },
    GalleryImage { src: "luxury-restaurant.jpg", alt: "Dining Experience", category: "Dining", span: "" },
    GalleryImage { src: "gallery3.jpg", alt: "Forest Path", category: "Nature", span: "" },
];

/// (label, anchor)
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Facilities", "#facilities"),
    ("Rooms", "#rooms"),
    ("Gallery", "#gallery"),
    ("Contact", "#contact"),
];

pub const FOOTER_LINK_GROUPS: &[(&str, &[(&str, &str)])] = &[
    ("Quick Links", NAV_ITEMS),
    (
        "Services",
        &[
            ("Room Booking", "#rooms"),
            ("Jeep Safari", "#facilities"),
            ("Forest Trekking", "#facilities"),
            ("Restaurant", "#facilities"),
            ("Function Hall", "#facilities"),
            ("Event Planning", "#contact"),
        ],
    ),
    (
        "Policies",
        &[
            ("Booking Policy", "/booking-policy"),
            ("Cancellation", "/cancellation"),
            ("Privacy Policy", "/privacy"),
            ("Terms & Conditions", "/terms"),
            ("Safety Guidelines", "/safety"),
            ("Eco-Friendly Practices", "/eco-friendly"),
        ],
    ),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com/jlkabinipalace"),
    ("Instagram", "https://instagram.com/jlkabinipalace"),
    ("Twitter", "https://twitter.com/jlkabinipalace"),
];

pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub action: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        icon: "📞",
        title: "Phone",
        details: &["+91 98765 43210", "+91 87654 32109"],
        action: "Call Now",
        href: "tel:+919876543210",
    },
    ContactCard {
        icon: "✉️",
        title: "Email",
        details: &["info@jlkabinipalace.com", "bookings@jlkabinipalace.com"],
        action: "Send Email",
        href: "mailto:info@jlkabinipalace.com",
    },
    ContactCard {
        icon: "📍",
        title: "Location",
        details: &["Kabini Forest Area", "Karnataka, India"],
        action: "Get Directions",
        href: "https://maps.google.com/?q=Kabini+Karnataka",
    },
    ContactCard {
        icon: "💬",
        title: "WhatsApp",
        details: &["+91 98765 43210"],
        action: "Chat Now",
        href: "https://wa.me/919876543210",
    },
];

/// (value, label) pairs for the room inquiry select.
pub const INQUIRY_OPTIONS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("booking", "Room Booking"),
    ("kings-grove", "The King's Grove"),
    ("empress-suite", "The Empress Suite"),
    ("regal-crest", "Regal Crest"),
];
