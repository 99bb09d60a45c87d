//! The clinic landing page used by the demo session.

use webdom::{Document, Element, Rect};

fn nav_item(id: &str, href: &str, label: &str) -> Element {
    Element::new("li")
        .id(format!("nav-{id}"))
        .class("nav-item")
        .child(Element::anchor(href).id(format!("link-{id}")).class("nav-link").text(label))
}

fn card(id: &str, class: &str, title: &str) -> Element {
    Element::div()
        .id(id)
        .class(class)
        .child(Element::new("h3").text(title))
}

fn header() -> Element {
    Element::new("header")
        .id("header")
        .class("header-container")
        .child(Element::anchor("#").id("brand").text("Shiva Zen"))
        .child(Element::button().id("toggler").class("navbar-toggler"))
        .child(
            Element::div()
                .id("mobileMenu")
                .classes("collapse navbar-collapse")
                .child(
                    Element::new("ul")
                        .id("nav")
                        .child(nav_item("home", "#inicio", "Início"))
                        .child(nav_item("services", "#servicos", "Serviços"))
                        .child(nav_item("gallery", "#galeria", "Galeria"))
                        .child(nav_item("contact", "#contato", "Contato")),
                ),
        )
}

fn contact_form() -> Element {
    Element::form()
        .id("booking")
        .child(
            Element::div()
                .class("mb-3")
                .child(Element::input("text").id("name").attr("name", "nome").required()),
        )
        .child(
            Element::div()
                .class("mb-3")
                .child(Element::input("email").id("email").attr("name", "email").required()),
        )
        .child(
            Element::div()
                .class("mb-3")
                .child(Element::input("password").id("password").attr("name", "senha")),
        )
        .child(Element::textarea().id("notes").attr("name", "observacoes"))
        .child(
            Element::button()
                .id("book")
                .attr("type", "submit")
                .classes("btn btn-primary")
                .text("Agendar"),
        )
}

/// Markup plus a fixed desktop layout.
pub fn clinic_page() -> Document {
    let body = Element::body()
        .child(header())
        .child(Element::new("section").id("inicio").child(card("hero", "card", "Bem-vinda")))
        .child(
            Element::new("section")
                .id("servicos")
                .child(card("massage", "service-card", "Massagem"))
                .child(card("facial", "service-card", "Limpeza de pele"))
                .child(card("review", "testimonial-card", "Depoimentos")),
        )
        .child(
            Element::new("section")
                .id("galeria")
                .child(card("photo-1", "gallery-card", "Sala 1"))
                .child(card("photo-2", "gallery-card", "Sala 2")),
        )
        .child(Element::new("section").id("contato").child(contact_form()));

    Document::new(body)
        .with_viewport(1280, 720)
        .with_rect("header", Rect::new(0, 0, 1280, 80))
        .with_rect("inicio", Rect::new(0, 80, 1280, 640))
        .with_rect("hero", Rect::new(240, 200, 800, 400))
        .with_rect("servicos", Rect::new(0, 720, 1280, 900))
        .with_rect("massage", Rect::new(80, 800, 360, 400))
        .with_rect("facial", Rect::new(460, 800, 360, 400))
        .with_rect("review", Rect::new(840, 1250, 360, 300))
        .with_rect("galeria", Rect::new(0, 1620, 1280, 700))
        .with_rect("photo-1", Rect::new(80, 1700, 540, 500))
        .with_rect("photo-2", Rect::new(660, 1700, 540, 500))
        .with_rect("contato", Rect::new(0, 2320, 1280, 900))
        .with_rect("booking", Rect::new(240, 2400, 800, 700))
        .with_rect("name", Rect::new(240, 2420, 800, 48))
        .with_rect("email", Rect::new(240, 2490, 800, 48))
        .with_rect("password", Rect::new(240, 2560, 800, 48))
        .with_rect("notes", Rect::new(240, 2630, 800, 160))
        .with_rect("book", Rect::new(240, 2820, 200, 48))
}
