use crate::domain::order::model::Order;

/// Formats the yearly-scoped invoice number, e.g. `2026-000042`.
pub fn invoice_number(year: i32, sequence: u32) -> String {
    format!("{year}-{sequence:06}")
}

/// Splits a stored number back into year and sequence.
pub fn parse_invoice_number(number: &str) -> Option<(i32, u32)> {
    let (year, sequence) = number.split_once('-')?;
    if sequence.len() != 6 {
        return None;
    }
    Some((year.parse().ok()?, sequence.parse().ok()?))
}

/// Renders the receipt HTML handed to the PDF engine. Plain inline-styled
/// markup; layout niceties belong to the template, not this module.
pub fn receipt_html(order: &Order, number: &str) -> String {
    let mut rows = String::new();
    for line in &order.lines {
        let gift_mark = if line.is_gift { " (regalo)" } else { "" };
        rows.push_str(&format!(
            "<tr><td>{}{}</td><td>{}</td><td>{:.2} €</td><td>{:.2} €</td></tr>\n",
            escape(&line.name),
            gift_mark,
            line.quantity,
            line.unit_price,
            line.unit_price * f64::from(line.quantity),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Factura {number}</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ border-bottom: 1px solid #ddd; padding: 6px; text-align: left; }}
.totals {{ margin-top: 1em; text-align: right; }}
</style>
</head>
<body>
<h1>Factura {number}</h1>
<p>Pedido: {order_id}<br>Fecha: {date}</p>
<p>{full_name}<br>{street}<br>{postal_code} {city}<br>{country}</p>
<table>
<thead><tr><th>Artículo</th><th>Cantidad</th><th>Precio</th><th>Importe</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<div class="totals">
<p>Subtotal: {subtotal:.2} €<br>
IVA incluido: {tax:.2} €<br>
Envío: {shipping:.2} €<br>
<strong>Total: {total:.2} €</strong></p>
</div>
</body>
</html>
"#,
        number = number,
        order_id = order.id,
        date = order.created_at.format("%d/%m/%Y"),
        full_name = escape(&order.address.full_name),
        street = escape(&order.address.street),
        postal_code = escape(&order.address.postal_code),
        city = escape(&order.address.city),
        country = escape(&order.address.country),
        rows = rows,
        subtotal = order.totals.subtotal,
        tax = order.totals.tax,
        shipping = order.totals.shipping,
        total = order.totals.total,
    )
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
