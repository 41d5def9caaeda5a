use std::{fmt::Write as _, io::{self, Write}, pin::Pin, time::Duration};
use tokio::sync::mpsc;
use tracing::{trace, warn};
use crate::{
    kiosk::{KioskEvent, Screen, Snapshot},
    model::Category,
    utils::{format_won, line_label, tab_index},
};


// Render the whole screen for a snapshot
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    render_header(&mut out, snapshot);

    match snapshot.screen() {
        Screen::Start => render_start(&mut out),
        Screen::Browsing => {
            render_tabs(&mut out, snapshot.selection.active_category);
            render_tiles(&mut out, snapshot);
            render_cart_bar(&mut out, snapshot);
        }
        Screen::ConfiguringOption => render_options(&mut out, snapshot),
        Screen::Receipt => render_receipt(&mut out, snapshot),
    }
    out
}

fn render_header(out: &mut String, snapshot: &Snapshot) {
    out.push_str("🍔 버거 키오스크");
    if let Some(order_type) = snapshot.selection.order_type {
        let _ = write!(out, "  [{}]", order_type.label());
    }
    if !snapshot.cart.is_empty() {
        let _ = write!(out, "  ({}개)", snapshot.cart.len());
    }
    out.push_str("\n\n");
}

fn render_start(out: &mut String) {
    out.push_str("어디서 드시겠어요?\n");
    out.push_str("  d) 매장에서 먹기\n");
    out.push_str("  t) 포장하기\n");
}

fn render_tabs(out: &mut String, active: Category) {
    for cat in Category::TABS {
        let i = tab_index(cat);
        if cat == active {
            let _ = write!(out, "[{}:{}] ", i, cat.label());
        } else {
            let _ = write!(out, " {}:{}  ", i, cat.label());
        }
    }
    out.push_str("\n\n");
}

fn render_tiles(out: &mut String, snapshot: &Snapshot) {
    for (pos, entry) in snapshot.visible_menus().into_iter().enumerate() {
        let _ = write!(
            out,
            "{:>2}) {} {} {}~",
            pos + 1,
            entry.image,
            entry.name,
            format_won(u64::from(entry.base_price))
        );
        if let Some(tag) = &entry.tag {
            let _ = write!(out, " <{}>", tag);
        }
        if entry.sold_out {
            out.push_str(" [품절]");
        }
        out.push('\n');
    }
}

// Only shown when there is something in the cart
fn render_cart_bar(out: &mut String, snapshot: &Snapshot) {
    if snapshot.cart.is_empty() {
        return;
    }
    out.push_str("\n------------------------------\n");
    let _ = writeln!(out, "총 주문 금액  {}", format_won(snapshot.cart.total()));
    for line in snapshot.cart.lines() {
        let _ = writeln!(out, "  {} {} x{}", line.image, line_label(line), line.quantity);
    }
    out.push_str("x) 취소   p) 결제하기\n");
}

fn render_options(out: &mut String, snapshot: &Snapshot) {
    let Some(pending) = &snapshot.selection.pending else {
        return;
    };
    let _ = writeln!(out, "{} {}", pending.menu.image, pending.menu.name);
    out.push_str("옵션을 선택해주세요\n");
    for (pos, option) in pending.menu.options.iter().enumerate() {
        let mark = if option.name == pending.option.name { "(●)" } else { "( )" };
        let _ = write!(out, "{:>2}) {} {}", pos + 1, mark, option.name);
        if option.price_delta > 0 {
            let _ = write!(out, "  +{}", format_won(u64::from(option.price_delta)));
        }
        out.push('\n');
    }
    let _ = writeln!(out, "\ny) {} 담기   n) 닫기", format_won(u64::from(pending.price())));
}

fn render_receipt(out: &mut String, snapshot: &Snapshot) {
    let Some(receipt) = &snapshot.receipt else {
        return;
    };
    out.push_str("결제 완료! 맛있게 드세요 🍔\n\n");
    let _ = writeln!(out, "주문번호  {}", receipt.number);
    let _ = writeln!(out, "주문시각  {}", receipt.issued_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(order_type) = receipt.order_type {
        let _ = writeln!(out, "주문유형  {}", order_type.label());
    }
    out.push_str("------------------------------\n");
    for line in &receipt.lines {
        let _ = writeln!(
            out,
            "{} x{}  {}",
            line_label(line),
            line.quantity,
            format_won(line.line_total())
        );
    }
    out.push_str("------------------------------\n");
    let _ = writeln!(out, "합계  {}", format_won(receipt.total));
    out.push_str("\nr) 처음으로\n");
}


// Render the kiosk to the terminal
pub fn redraw_screen<W: Write>(term: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    // Move cursor to top-left and clear screen
    write!(term, "\x1B[H\x1B[0J")?;
    write!(term, "{}", render(snapshot))?;
    write!(term, "> ")?;
    term.flush()
}


// Redraw `term` as snapshots arrive; hands the writer back once the kiosk is gone
pub async fn dashboard_task<W: Write>(
    mut events_rx: mpsc::UnboundedReceiver<KioskEvent>,
    initial: Snapshot,
    debounce: Duration,
    mut term: W,
) -> W {
    let mut latest = initial;

    // Render once at startup
    draw(&mut term, &latest);

    // "dirty flag": state changed since last render
    let mut dirty = false;

    // Debounce timer: coalesce bursts of input into one redraw
    let mut pending: Option<Pin<Box<tokio::time::Sleep>>> = None;

    loop {
        tokio::select! {
            ev = events_rx.recv() => {
                match ev {
                    Some(KioskEvent::Changed(snapshot)) => {
                        latest = snapshot;
                        dirty = true;

                        // Start debounce if not already running
                        if pending.is_none() {
                            pending = Some(Box::pin(tokio::time::sleep(debounce)));
                        }
                    }
                    None => {
                        // Kiosk dropped; do a final render if needed and exit
                        if dirty {
                            draw(&mut term, &latest);
                        }
                        break;
                    }
                }
            }

            // Debounce fires: redraw once if anything changed
            _ = async {
                if let Some(s) = &mut pending {
                    s.as_mut().await;
                }
            }, if pending.is_some() => {
                if dirty {
                    trace!(screen = ?latest.screen(), "redraw");
                    draw(&mut term, &latest);
                    dirty = false;
                }
                pending = None;
            }
        }
    }

    let _ = writeln!(term);
    let _ = term.flush();
    term
}

fn draw<W: Write>(term: &mut W, snapshot: &Snapshot) {
    if let Err(err) = redraw_screen(term, snapshot) {
        warn!(%err, "redraw failed");
    }
}
