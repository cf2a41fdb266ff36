use super::{escape, nav_button};
use crate::entities::Destination;
use crate::session::Snapshot;

pub fn render_list(snapshot: &Snapshot) -> String {
    let grid = if snapshot.is_loading {
        r#"<div class="loading">Loading destinations...</div>"#.to_string()
    } else {
        let cards: Vec<String> = snapshot.destinations.iter().map(destination_card).collect();
        format!(r#"<div class="grid">{}</div>"#, cards.join("\n"))
    };

    format!(
        r#"<section class="intro">
<h1>Explore Sri Lanka</h1>
<p>From the misty tea plantations of the hill country to ancient kingdoms and sun-kissed beaches, discover the endless wonders of the island.</p>
{back}
</section>
<section id="destinations">
{grid}
</section>"#,
        back = nav_button("home", None, "\u{2190} Back to Home"),
        grid = grid,
    )
}

fn destination_card(destination: &Destination) -> String {
    format!(
        r#"<article class="card" data-id="{id}">
<img src="{image}" alt="{name}">
<h3>{name}</h3>
<p>{description}</p>
<form method="post" action="/destinations/{id}/select"><button>Explore More &rarr;</button></form>
</article>"#,
        id = destination.id,
        image = escape(&destination.image_url),
        name = escape(&destination.name),
        description = escape(&destination.description),
    )
}

pub fn render_detail(destination: &Destination) -> String {
    format!(
        r#"<section class="hero" style="background-image: url('{image}')">
<h1>{name}</h1>
</section>
<section>
<h2>About {name}</h2>
<p>{description}</p>
<p>Immerse yourself in the rich history and natural beauty that makes this destination a must-see. From ancient tales whispered by the ruins to the vibrant wildlife that roams the landscapes, there is a story waiting to be discovered around every corner.</p>
<p>Whether you are an adventure seeker, a history enthusiast, or simply looking for a peaceful retreat, this location offers a unique blend of experiences. Allow our expert guides to show you the hidden gems and create memories that will last a lifetime.</p>
<form method="post" action="/destinations/back"><button>&larr; Back to All Destinations</button></form>
</section>"#,
        image = escape(&destination.image_url),
        name = escape(&destination.name),
        description = escape(&destination.description),
    )
}
