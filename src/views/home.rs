use super::{escape, forms, nav_button};
use crate::entities::Vehicle;
use crate::session::Snapshot;

pub fn render(snapshot: &Snapshot) -> String {
    let fleet = if snapshot.is_loading {
        r#"<div class="loading">Loading vehicles...</div>"#.to_string()
    } else {
        let cards: Vec<String> = snapshot.vehicles.iter().map(fleet_card).collect();
        format!(r#"<div class="grid">{}</div>"#, cards.join("\n"))
    };

    format!(
        r#"<section id="home" class="hero">
<h1>Discover the Pearl of the Indian Ocean</h1>
<p>Craft your unforgettable Sri Lankan journey with our bespoke tours and premium vehicle fleet.</p>
{explore}
</section>
<section id="fleet">
<h2>Our Premium Fleet</h2>
<p>Travel in comfort and style. We offer a diverse range of vehicles to suit every need and budget for your island adventure.</p>
{fleet}
</section>
<section id="quote">
{quote}
{planner}
</section>"#,
        explore = nav_button("destinations", None, "Explore Destinations"),
        fleet = fleet,
        quote = forms::render_quote(&snapshot.quote),
        planner = forms::render_planner(&snapshot.planner),
    )
}

fn fleet_card(vehicle: &Vehicle) -> String {
    format!(
        r#"<article class="card" data-id="{id}">
<img src="{image}" alt="{name}">
<span class="badge">{kind}</span>
<h3>{name}</h3>
<p>Up to {capacity} passengers</p>
<p><strong>${rate}</strong> / KM</p>
<form method="post" action="/vehicles/{id}/booking"><button>Book Now</button></form>
</article>"#,
        id = vehicle.id,
        image = escape(&vehicle.image_url),
        name = escape(&vehicle.name),
        kind = escape(&vehicle.kind),
        capacity = vehicle.capacity,
        rate = vehicle.rate_per_km,
    )
}
