use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use caption::core::menu::MenuGroup;
use caption::prelude::*;

const MENU: &str = r#"[
    { "label": "File", "subMenu": [
        { "label": "New Document", "hotKey": "Ctrl+N" },
        { "label": "New Window", "hotKey": "Ctrl+Shift+N" },
        { "separator": true },
        { "label": "Open Recent", "subMenu": [
            { "label": "document1.txt" },
            { "label": "project.rs" }
        ] },
        { "separator": true },
        { "label": "Quit", "hotKey": "Ctrl+Q" }
    ] },
    { "label": "Edit", "subMenu": [
        { "label": "Undo", "hotKey": "Ctrl+Z" },
        { "label": "Redo", "hotKey": "Ctrl+Shift+Z" }
    ] },
    { "label": "View", "subMenu": [ { "label": "Zoom In", "hotKey": "Ctrl+=" } ] },
    { "label": "Window", "subMenu": [ { "label": "Minimize" }, { "label": "Maximize" } ] },
    { "label": "Help", "subMenu": [ { "label": "About" } ] },
    { "hotKey": "Ctrl+B", "subMenu": [] }
]"#;

#[derive(Default)]
struct DemoWindow {
    maximized: AtomicBool,
}

#[async_trait]
impl WindowControl for DemoWindow {
    async fn is_maximized(&self) -> bool {
        self.maximized.load(Ordering::SeqCst)
    }

    async fn maximize(&self) {
        log::info!("window maximized");
        self.maximized.store(true, Ordering::SeqCst);
    }

    async fn minimize(&self) {
        log::info!("window minimized");
    }

    async fn restore(&self) {
        log::info!("window restored");
        self.maximized.store(false, Ordering::SeqCst);
    }

    async fn close(&self) {
        log::info!("window closed");
    }
}

fn print_tree(tree: &MenuTree) {
    for MenuGroup { level, origin, items } in &tree.groups {
        let indent = "  ".repeat(*level);
        match origin {
            Some(origin) => println!("{}level {} at ({}, {})", indent, level, origin.x, origin.y),
            None => println!("{}root bar", indent),
        }
        for item in items {
            let line = match item {
                MenuNode::Separator => "----".to_string(),
                MenuNode::Blank => "(blank)".to_string(),
                MenuNode::Collapse { selected } => format!("[...]{}", if *selected { " *" } else { "" }),
                MenuNode::Item { label, selected, trailing } => {
                    let trailing = match trailing {
                        Trailing::None => String::new(),
                        Trailing::Icon(_) => " >".to_string(),
                        Trailing::HotKey(hot_key) => format!("  {}", hot_key),
                    };
                    format!("{}{}{}", label, trailing, if *selected { " *" } else { "" })
                },
            };
            println!("{}  {}", indent, line);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MenuConfig::from_env()?;
    let probe = EstimatedLayout::new(Vector2::new(640.0, 30.0))
        .with_title_area(Rect::new(280.0, 0.0, 420.0, 28.0));
    let mut menu = MenuController::with_config(probe, config, |event: &MenuEvent| {
        println!("{}({:?})", event.name(), event.label());
    });

    let failures = menu.set_menu_json(MENU)?;
    println!("{} invalid menu entries", failures.len());
    let layout = menu.create_root_menu();
    println!("{} root entries, {} collapsed", layout.fitted(), layout.collapsed);

    let (transport, _host) = spawn_host(Arc::new(DemoWindow::default()));
    let window = WindowApi::new(transport);

    let script = [
        MenuInput::Click(ClickTarget::Entry(EntryId::new(0, 0))),
        MenuInput::PointerOver(EntryId::new(1, 3)),
        MenuInput::Click(ClickTarget::Entry(EntryId::new(2, 1))),
        MenuInput::Click(ClickTarget::Entry(EntryId::new(0, layout.entries.len().saturating_sub(1)))),
        MenuInput::Click(ClickTarget::Outside),
        MenuInput::KeyDown(KeyInput::character("n", ModifiersState::CONTROL | ModifiersState::SHIFT)),
    ];

    for input in script {
        println!("> {:?}", input);
        let dispatch = menu.handle(input);
        print_tree(&menu.render());

        for event in &dispatch.events {
            match event.label() {
                "Maximize" => window.maximize().await?,
                "Minimize" => window.minimize().await?,
                "Quit" => window.close().await?,
                _ => {},
            }
        }
    }

    if window.is_maximized().await? {
        window.restore().await?;
    }

    Ok(())
}
