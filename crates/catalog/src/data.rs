//! The static sample dataset backing the catalog.
//!
//! Declaration order is load-bearing: local reels (ids "1".."6") come first,
//! Instagram reels ("ig1".."ig3") after, and every query preserves this order
//! as filtered.

use crate::types::{Reel, ReelSource};

fn local(
    id: &str,
    video_url: &str,
    thumbnail_url: &str,
    username: &str,
    caption: &str,
    likes: u64,
    views: u64,
) -> Reel {
    Reel {
        id: id.to_string(),
        thumbnail_url: thumbnail_url.to_string(),
        username: username.to_string(),
        caption: caption.to_string(),
        likes,
        views,
        source: ReelSource::Local {
            video_url: video_url.to_string(),
        },
    }
}

fn instagram(
    id: &str,
    thumbnail_url: &str,
    username: &str,
    caption: &str,
    likes: u64,
    views: u64,
    instagram_id: &str,
) -> Reel {
    Reel {
        id: id.to_string(),
        thumbnail_url: thumbnail_url.to_string(),
        username: username.to_string(),
        caption: caption.to_string(),
        likes,
        views,
        source: ReelSource::Instagram {
            instagram_url: format!("https://www.instagram.com/reel/{instagram_id}/"),
            instagram_id: instagram_id.to_string(),
        },
    }
}

/// The full sample catalog, in fixed declaration order.
pub fn sample_reels() -> Vec<Reel> {
    vec![
        local(
            "1",
            "https://assets.mixkit.co/videos/preview/mixkit-woman-running-on-a-bridge-during-sunset-33535-large.mp4",
            "https://cdn.pixabay.com/photo/2016/11/29/11/39/woman-1869116_1280.jpg",
            "fitness_lover",
            "Morning run #fitness #health #running",
            1203,
            5789,
        ),
        local(
            "2",
            "https://assets.mixkit.co/videos/preview/mixkit-making-cookies-in-the-oven-2532-large.mp4",
            "https://cdn.pixabay.com/photo/2016/11/29/11/45/dessert-1869227_1280.jpg",
            "bakewithme",
            "Baking day! #cookies #baking #dessert",
            4567,
            12345,
        ),
        local(
            "3",
            "https://assets.mixkit.co/videos/preview/mixkit-road-seen-from-a-car-window-on-a-rainy-day-9001-large.mp4",
            "https://cdn.pixabay.com/photo/2018/01/14/23/12/nature-3082832_1280.jpg",
            "travel_addict",
            "Road trip vibes 🚗 #travel #roadtrip #adventure",
            3456,
            8765,
        ),
        local(
            "4",
            "https://assets.mixkit.co/videos/preview/mixkit-woman-dancing-happily-in-a-field-4702-large.mp4",
            "https://cdn.pixabay.com/photo/2018/01/14/23/12/nature-3082832_1280.jpg",
            "dance_queen",
            "Express yourself through dance 💃 #dance #freedom #joy",
            6789,
            19876,
        ),
        local(
            "5",
            "https://assets.mixkit.co/videos/preview/mixkit-waterfall-in-forest-2213-large.mp4",
            "https://cdn.pixabay.com/photo/2015/04/23/22/00/tree-736885_1280.jpg",
            "nature_explorer",
            "Nature's beauty 🌿 #nature #waterfall #peaceful",
            8901,
            23456,
        ),
        local(
            "6",
            "https://assets.mixkit.co/videos/preview/mixkit-coffee-shop-working-on-laptop-513-large.mp4",
            "https://cdn.pixabay.com/photo/2015/05/31/10/55/man-791049_1280.jpg",
            "digital_nomad",
            "Coffee shop productivity #remote #work #coffee",
            2345,
            7890,
        ),
        instagram(
            "ig1",
            "https://cdn.pixabay.com/photo/2017/05/07/08/56/pancakes-2291908_1280.jpg",
            "chefstories",
            "One-pan pasta magic 🍝 #cooking #recipe #foodie",
            15632,
            98765,
            "C4xKp2QrLmN",
        ),
        instagram(
            "ig2",
            "https://cdn.pixabay.com/photo/2016/11/29/04/00/buildings-1867187_1280.jpg",
            "urban_sketcher",
            "Sketching the city skyline ✏️ #art #drawing #urban",
            7845,
            45210,
            "C5aBt7WsPqX",
        ),
        instagram(
            "ig3",
            "https://cdn.pixabay.com/photo/2016/11/29/01/34/man-1866574_1280.jpg",
            "wave_rider",
            "Sunrise surf session 🌊 #surfing #ocean #dawnpatrol",
            5421,
            31876,
            "C6mNh9KtVzY",
        ),
    ]
}
