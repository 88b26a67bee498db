use htmlize::{escape_attribute, escape_text};
use signpost_core::{ResultData, Service};

const START_OVER_ACTION: &str = "start-over";

/// Renders a recommendation as the fragment placed inside the results container.
///
/// Services keep table order. A service only gets a call-to-action link when it has a non-empty
/// link; the fallback record renders with an empty services block.
pub fn render_result(data: &ResultData) -> String {
    let mut out = String::with_capacity(512 + data.services.len() * 1024);

    out.push_str(r#"<div class="result-content">"#);
    push_text_element(&mut out, "h3", Some("result-title"), data.title);
    push_text_element(&mut out, "p", Some("result-description"), data.description);

    out.push_str(r#"<div class="result-services">"#);
    for service in data.services {
        push_service(&mut out, service);
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="result-actions">"#);
    out.push_str(r#"<button class="btn btn-primary" data-action=""#);
    out.push_str(START_OVER_ACTION);
    out.push_str(r#"">Start Over</button>"#);
    out.push_str(r##"<a href="#use-cases" class="btn btn-secondary">View Use Cases</a>"##);
    out.push_str("</div>");

    out.push_str("</div>");
    out
}

fn push_service(out: &mut String, service: &Service) {
    out.push_str(r#"<div class="result-service">"#);
    push_text_element(out, "h4", None, service.name);
    push_text_element(out, "p", None, service.description);

    out.push_str(r#"<div class="service-benefits"><strong>Key Benefits:</strong><ul>"#);
    for benefit in service.benefits {
        push_text_element(out, "li", None, benefit);
    }
    out.push_str("</ul></div>");

    out.push_str(r#"<div class="service-cost"><strong>Cost Considerations:</strong>"#);
    push_text_element(out, "p", None, service.cost);
    out.push_str("</div>");

    out.push_str(r#"<div class="service-best-for"><strong>Best For:</strong>"#);
    push_text_element(out, "p", None, service.best_for);
    out.push_str("</div>");

    if let Some(link) = service.call_to_action() {
        out.push_str(r#"<a href=""#);
        out.push_str(&escape_attribute(link));
        out.push_str(r#"" target="_blank" rel="noopener" class="service-link">Get Started →</a>"#);
    }

    out.push_str("</div>");
}

fn push_text_element(out: &mut String, tag: &str, class: Option<&str>, text: &str) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(r#" class=""#);
        out.push_str(class);
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape_text(text));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
