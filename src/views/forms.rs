use super::escape;
use crate::forms::{BookingModal, FormState, QuoteForm};
use crate::planner::{PlanOutcome, PlannerPanel};

struct Input {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    required: bool,
    placeholder: &'static str,
}

const BOOKING_INPUTS: &[Input] = &[
    Input { name: "name", label: "Full Name", kind: "text", required: true, placeholder: "" },
    Input { name: "email", label: "Email", kind: "email", required: true, placeholder: "" },
    Input { name: "phone", label: "Phone", kind: "tel", required: true, placeholder: "" },
    Input { name: "pickupDate", label: "Pickup Date", kind: "date", required: true, placeholder: "" },
    Input {
        name: "pickupLocation",
        label: "Pickup Location",
        kind: "text",
        required: true,
        placeholder: "e.g., Airport or Hotel",
    },
];

const QUOTE_INPUTS: &[Input] = &[
    Input { name: "name", label: "Full Name", kind: "text", required: true, placeholder: "" },
    Input { name: "email", label: "Email Address", kind: "email", required: true, placeholder: "" },
    Input { name: "phone", label: "Phone Number (Optional)", kind: "tel", required: false, placeholder: "" },
    Input { name: "travelers", label: "Number of Travelers", kind: "number", required: true, placeholder: "e.g., 2" },
    Input { name: "duration", label: "Trip Duration (days)", kind: "number", required: true, placeholder: "e.g., 7" },
    Input { name: "dates", label: "Preferred Dates", kind: "text", required: true, placeholder: "e.g., Mid-September" },
];

fn render_inputs(inputs: &[Input], form: &FormState) -> String {
    inputs
        .iter()
        .map(|input| {
            let min = if input.kind == "number" { r#" min="1""# } else { "" };

            format!(
                r#"<label>{label}<input type="{kind}" name="{name}" value="{value}" placeholder="{placeholder}"{min}{required}></label>"#,
                label = escape(input.label),
                kind = input.kind,
                name = input.name,
                value = escape(form.field(input.name)),
                placeholder = escape(input.placeholder),
                min = min,
                required = if input.required { " required" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn submit_button(form: &FormState, idle: &str, busy: &str) -> String {
    if form.is_loading {
        return format!("<button disabled>{}</button>", escape(busy));
    }

    let touched = form.fields.values().any(|value| !value.trim().is_empty());

    let hint = if touched && !form.can_submit() {
        "<p class=\"hint\">Please fill in every required field.</p>\n"
    } else {
        ""
    };

    format!("{}<button>{}</button>", hint, escape(idle))
}

pub fn render_booking(modal: &BookingModal) -> String {
    let body = if modal.form.is_submitted {
        format!(
            r#"<h2>Booking Confirmed!</h2>
<p>Thank you for your booking! A confirmation has been sent to <strong>{email}</strong>. We look forward to serving you.</p>
<form method="post" action="/booking/close"><button>Close</button></form>"#,
            email = escape(modal.form.email()),
        )
    } else {
        format!(
            r#"<h2>Book Your Ride</h2>
<p>You're booking the <strong>{vehicle}</strong>. Fill out your details below.</p>
<form method="post" action="/booking/submit">
{inputs}
{button}
</form>"#,
            vehicle = escape(&modal.vehicle),
            inputs = render_inputs(BOOKING_INPUTS, &modal.form),
            button = submit_button(&modal.form, "Confirm Booking", "Submitting..."),
        )
    };

    format!(
        r#"<div class="modal" role="dialog">
<form method="post" action="/booking/close"><button aria-label="Close">&times;</button></form>
{}
</div>"#,
        body
    )
}

pub fn render_quote(quote: &QuoteForm) -> String {
    let form = &quote.form;

    if form.is_submitted {
        return format!(
            r#"<div class="quote-confirmation">
<h2>Thank You!</h2>
<p>Your quote request has been sent successfully. Our travel experts will get back to you at <strong>{email}</strong> within 24 hours.</p>
<form method="post" action="/quote/reset"><button>Submit Another Inquiry</button></form>
</div>"#,
            email = escape(form.email()),
        );
    }

    format!(
        r#"<div class="quote">
<h2>Get a Custom Tour Quote</h2>
<p>Fill out the form below, and our experts will craft a personalized itinerary and quote for you.</p>
<form method="post" action="/quote/submit">
{inputs}
<label>Your Dream Trip Details<textarea name="message" rows="5" placeholder="Tell us what you'd like to see and do!" required>{message}</textarea></label>
{button}
</form>
</div>"#,
        inputs = render_inputs(QUOTE_INPUTS, form),
        message = escape(form.field("message")),
        button = submit_button(form, "Request My Quote", "Sending..."),
    )
}

pub fn render_planner(panel: &PlannerPanel) -> String {
    let result = match &panel.outcome {
        Some(PlanOutcome::Plan(text)) => format!(r#"<pre class="plan">{}</pre>"#, escape(text)),
        Some(PlanOutcome::Failed(message)) => {
            format!(r#"<p class="error">{}</p>"#, escape(message))
        }
        None => String::new(),
    };

    let button = if panel.is_loading {
        "<button disabled>Planning...</button>"
    } else {
        "<button>Plan My Trip</button>"
    };

    format!(
        r#"<div class="planner">
<h2>AI Trip Planner</h2>
<form method="post" action="/planner">
<textarea name="request" rows="4" placeholder="Describe your dream trip" required>{request}</textarea>
{button}
</form>
{result}
</div>"#,
        request = escape(&panel.request),
        button = button,
        result = result,
    )
}
