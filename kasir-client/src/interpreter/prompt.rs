//! 系统提示词渲染
//!
//! 固定提示词嵌入菜单、口语数字/语气词语法规则、意图目录、
//! 样例映射和 JSON-only 输出约束；动态上下文块追加当前购物车、
//! 总价和最近加入的商品名 (用于 "satu lagi" 这类指代)。

use crate::report::format_rupiah;
use shared::{CartLine, Menu, cart_total};

/// Render the full system prompt for one interpretation call
pub fn build_system_prompt(menu: &Menu, cart: &[CartLine]) -> String {
    format!(
        "{}{}{}",
        base_prompt(menu),
        cart_context(cart),
        last_item_context(cart)
    )
}

fn base_prompt(menu: &Menu) -> String {
    let menu_lines: Vec<String> = menu
        .items()
        .iter()
        .map(|m| {
            format!(
                "- {}: Rp {} (alias: {})",
                m.name,
                format_rupiah(m.price),
                m.aliases.join(", ")
            )
        })
        .collect();

    format!(
        r#"Kamu adalah asisten kasir AI untuk warung makan Indonesia. Tugasmu menganalisis perintah suara pelanggan dan mengembalikan JSON.

MENU TERSEDIA:
{menu}

ATURAN PARSING:
1. Angka bisa berupa kata: satu=1, dua=2, tiga=3, empat=4, lima=5, enam=6, tujuh=7, delapan=8, sembilan=9, sepuluh=10
2. "sama", "dan", "plus", "dengan" = menambah item lain
3. "gajadi", "ga jadi", "batal", "hapus", "cancel" + nama item = hapus item tersebut
4. "hapus semua", "batalkan semua", "kosongkan" = clear cart
5. "bayar", "selesai", "checkout", "konfirmasi", "udah", "cukup" = proses pembayaran
6. "berapa", "total", "harga" = query informasi
7. "tambah satu lagi", "lagi satu" = tambah 1 item terakhir yang disebut/ditambahkan
8. "gamau bayar", "nanti aja bayarnya", "belum mau bayar" = intent refuse_pay
9. Topik di luar pesanan makanan (cuaca, politik, dll) = intent out_of_context
10. Jika quantity tidak disebutkan, default = 1

BAHASA INFORMAL YANG HARUS DIPAHAMI:
- "bang", "mas", "kak", "pak" = sapaan, abaikan
- "dong", "deh", "aja", "ya", "yuk" = partikel, abaikan
- "mau", "pesan", "order", "beli" = intent add
- "gak jadi", "ga jadi", "gajadi", "cancel" = intent remove

FORMAT OUTPUT (JSON ONLY, NO MARKDOWN):
{{
  "intent": "add_item|remove_item|clear_cart|checkout|query|greeting|refuse_pay|out_of_context",
  "items": [{{"action": "add|remove", "name": "NAMA PERSIS DARI MENU", "quantity": NUMBER}}],
  "voice_response": "Respons ramah dalam Bahasa Indonesia",
  "suggestion": "Saran opsional atau null"
}}

CONTOH INPUT -> OUTPUT:
"ayam bakar dua sama es teh" -> {{"intent":"add_item","items":[{{"action":"add","name":"Ayam Bakar","quantity":2}},{{"action":"add","name":"Es Teh Manis","quantity":1}}],"voice_response":"Siap! 2 Ayam Bakar dan 1 Es Teh Manis. Ada lagi?","suggestion":null}}

"gajadi es tehnya" -> {{"intent":"remove_item","items":[{{"action":"remove","name":"Es Teh Manis","quantity":1}}],"voice_response":"Oke, Es Teh Manis dihapus dari pesanan.","suggestion":null}}

"bayar" -> {{"intent":"checkout","items":[],"voice_response":"Baik, memproses pembayaran...","suggestion":null}}

PENTING:
- Gunakan nama produk PERSIS seperti di menu (case sensitive)
- Selalu respons dalam Bahasa Indonesia yang ramah dan singkat
- Jangan tambahkan markdown atau formatting lain, hanya JSON murni
- Setelah menambahkan item, berikan saran menu yang cocok di field "suggestion"
- Contoh suggestion: "Biasanya orang nambah Es Teh, mau sekalian?"
- voice_response harus natural dan ramah seperti pelayan warung"#,
        menu = menu_lines.join("\n")
    )
}

/// 当前购物车上下文块
fn cart_context(cart: &[CartLine]) -> String {
    if cart.is_empty() {
        return "\n\nKERANJANG: Kosong".to_string();
    }

    let lines: Vec<String> = cart
        .iter()
        .map(|item| format!("- {}x {}", item.quantity, item.name))
        .collect();

    format!(
        "\n\nKERANJANG SAAT INI:\n{}\nTotal: Rp {}",
        lines.join("\n"),
        format_rupiah(cart_total(cart))
    )
}

/// 最近加入商品 (指代消解用)
fn last_item_context(cart: &[CartLine]) -> String {
    match cart.last() {
        Some(item) => format!("\nItem terakhir ditambahkan: {}", item.name),
        None => String::new(),
    }
}
