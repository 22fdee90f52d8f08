use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::components::scroll::scroll_to_section;
use crate::config;
use crate::content::{Room, RoomCategory, ROOMS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoomFilter {
    #[default]
    All,
    Only(RoomCategory),
}

pub const ROOM_FILTERS: &[RoomFilter] = &[
    RoomFilter::All,
    RoomFilter::Only(RoomCategory::Luxury),
    RoomFilter::Only(RoomCategory::Premium),
    RoomFilter::Only(RoomCategory::Standard),
    RoomFilter::Only(RoomCategory::Family),
];

impl RoomFilter {
    pub fn label(self) -> &'static str {
        match self {
            RoomFilter::All => "All Rooms",
            RoomFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, room: &Room) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Only(category) => room.category == category,
        }
    }
}

/// Keeps catalog order.
pub fn filter_rooms(rooms: &[Room], filter: RoomFilter) -> Vec<&Room> {
    rooms.iter().filter(|room| filter.admits(room)).collect()
}

#[derive(Properties, PartialEq)]
struct RoomCardProps {
    room: Room,
    index: usize,
}

#[function_component(RoomCard)]
fn room_card(props: &RoomCardProps) -> Html {
    let room = props.room;
    let book = Callback::from(|_: MouseEvent| scroll_to_section("#contact"));

    html! {
        <article class="room-card" style={format!("animation-delay: {:.1}s;", 0.1 + props.index as f64 * 0.1)}>
            <div class="room-image" data-cursor="view">
                <img src={config::asset_url(room.image)} loading="lazy" alt={room.name} />
                <span class="room-number">{ format!("Room {}", room.id) }</span>
                <span class={classes!("room-category", room.category.badge_class())}>
                    { room.category.label() }
                </span>
                <span class="room-icon">{ room.icon }</span>
            </div>
            <div class="room-body">
                <h3>{ room.name }</h3>
                <p class="room-kind">{ room.kind }</p>
                <p class="room-description">{ room.description }</p>
                <ul class="room-features">
                    { room.features.iter().map(|f| html! { <li key={*f}>{*f}</li> }).collect::<Html>() }
                </ul>
                <div class="room-footer">
                    <div class="room-price">
                        { room.price }
                        <span>{"/night"}</span>
                    </div>
                    <button class="room-book cursor-luxury" onclick={book}>{"Book Now →"}</button>
                </div>
            </div>
        </article>
    }
}

#[function_component(RoomsSection)]
pub fn rooms_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let selected = use_state(RoomFilter::default);

    let filter_buttons = ROOM_FILTERS.iter().map(|filter| {
        let filter = *filter;
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(filter))
        };
        html! {
            <button
                key={filter.label()}
                class={classes!("filter-button", (*selected == filter).then(|| "active"))}
                onclick={onclick}
            >
                { filter.label() }
            </button>
        }
    }).collect::<Html>();

    let cards = filter_rooms(ROOMS, *selected)
        .into_iter()
        .enumerate()
        .map(|(index, room)| html! { <RoomCard key={room.id} room={*room} index={index} /> })
        .collect::<Html>();

    html! {
        <section id="rooms" class={classes!("rooms", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container">
                <div class="section-header">
                    <h3 class="eyebrow">{"LUXURY ACCOMMODATIONS"}</h3>
                    <h2>{"Royal Suites & Premium Rooms"}</h2>
                </div>
                <div class="room-filters">{ filter_buttons }</div>
                <div class="rooms-grid">{ cards }</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rooms: Vec<&Room>) -> Vec<&'static str> {
        rooms.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn all_rooms_in_catalog_order() {
        let rooms = filter_rooms(ROOMS, RoomFilter::All);
        assert_eq!(rooms.len(), 9);
        assert_eq!(rooms[0].name, "The King's Grove");
    }

    #[test]
    fn category_filters_pick_matching_rooms() {
        assert_eq!(ids(filter_rooms(ROOMS, RoomFilter::Only(RoomCategory::Luxury))), vec!["105"]);
        assert_eq!(ids(filter_rooms(ROOMS, RoomFilter::Only(RoomCategory::Family))), vec!["108"]);
        assert_eq!(
            ids(filter_rooms(ROOMS, RoomFilter::Only(RoomCategory::Premium))),
            vec!["110", "104", "101"]
        );
        assert_eq!(
            ids(filter_rooms(ROOMS, RoomFilter::Only(RoomCategory::Standard))),
            vec!["102", "103", "106", "107"]
        );
    }

    #[test]
    fn category_filters_partition_the_catalog() {
        let total: usize = ROOM_FILTERS
            .iter()
            .filter(|f| **f != RoomFilter::All)
            .map(|f| filter_rooms(ROOMS, *f).len())
            .sum();
        assert_eq!(total, ROOMS.len());
    }

    #[test]
    fn filter_labels() {
        let labels: Vec<_> = ROOM_FILTERS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Rooms", "Luxury", "Premium", "Standard", "Family"]);
    }
}
