use std::time::Duration;

use webdom::{Event, EventKind, SelectorList};

use crate::behavior::{Behavior, ListenerTarget, PageContext};
use crate::config::{self, ConfigError, MobileMenuConfig};
use crate::timer::TimerId;

/// Collapsible navigation on small screens: closes on outside clicks and
/// link clicks, and staggers its items in when opened.
#[derive(Debug)]
pub struct MobileMenu {
    toggler_selector: SelectorList,
    menu_selector: SelectorList,
    links_selector: SelectorList,
    items_selector: SelectorList,
    show_class: String,
    stagger: Duration,
    toggler: Option<String>,
    menu: Option<String>,
    /// Pending item reveals.
    reveals: Vec<(TimerId, String)>,
}

impl MobileMenu {
    pub fn new(config: &MobileMenuConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            toggler_selector: config::selector("mobile_menu.toggler", &config.toggler)?,
            menu_selector: config::selector("mobile_menu.menu", &config.menu)?,
            links_selector: config::selector("mobile_menu.links", &config.links)?,
            items_selector: config::selector("mobile_menu.items", &config.items)?,
            show_class: config.show_class.clone(),
            stagger: config.stagger(),
            toggler: None,
            menu: None,
            reveals: Vec::new(),
        })
    }

    pub fn menu(&self) -> Option<&str> {
        self.menu.as_deref()
    }

    fn hide(&self, menu: &str, cx: &mut PageContext<'_>) {
        if cx.document_mut().toggle_class(menu, &self.show_class, false) {
            log::debug!("[mobile-menu] hidden");
        }
    }

    fn on_document_click(&self, target: &str, cx: &mut PageContext<'_>) {
        let (Some(menu), Some(toggler)) = (&self.menu, &self.toggler) else {
            return;
        };
        let document = cx.document();
        let outside = !document.contains(menu, target) && !document.contains(toggler, target);
        if document.has_class(menu, &self.show_class) && outside {
            self.hide(menu, cx);
        }
    }

    fn animate_items(&mut self, menu: &str, cx: &mut PageContext<'_>) {
        for (timer, _) in self.reveals.drain(..) {
            cx.cancel(timer);
        }

        let items = cx.document().select_all(&self.items_selector, Some(menu));
        for (index, item) in items.into_iter().enumerate() {
            if let Some(el) = cx.document_mut().get_mut(&item) {
                el.set_style("opacity", "0");
                el.set_style("transform", "translateX(-20px)");
            }
            let step = u32::try_from(index).unwrap_or(u32::MAX);
            let timer = cx.schedule(self.stagger.saturating_mul(step));
            self.reveals.push((timer, item));
        }
    }
}

impl Behavior for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        let document = cx.document();
        let toggler = document.select_first(&self.toggler_selector, None);
        let menu = document.select_first(&self.menu_selector, None);
        let (Some(toggler), Some(menu)) = (toggler, menu) else {
            log::debug!("[mobile-menu] toggler or menu missing");
            return;
        };

        cx.listen(EventKind::Click, ListenerTarget::Document);
        for link in cx.document().select_all(&self.links_selector, Some(&menu)) {
            cx.listen_element(EventKind::Click, link);
        }
        cx.listen_element(EventKind::CollapseShown, menu.as_str());

        self.toggler = Some(toggler);
        self.menu = Some(menu);
    }

    fn handle(&mut self, event: &Event, current_target: Option<&str>, cx: &mut PageContext<'_>) {
        let Some(menu) = self.menu.clone() else {
            return;
        };

        match (event, current_target) {
            (Event::Click { target }, None) => self.on_document_click(target, cx),
            (Event::Click { .. }, Some(_link)) => self.hide(&menu, cx),
            (Event::CollapseShown { target }, Some(_)) if *target == menu => {
                self.animate_items(&menu, cx);
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, timer: TimerId, cx: &mut PageContext<'_>) {
        let Some(index) = self.reveals.iter().position(|(t, _)| *t == timer) else {
            return;
        };
        let (_, item) = self.reveals.remove(index);
        if let Some(el) = cx.document_mut().get_mut(&item) {
            el.set_style("transition", "all 0.3s ease");
            el.set_style("opacity", "1");
            el.set_style("transform", "translateX(0)");
        }
    }
}
