//! Server-side HTML for the library page

use crate::{
    models::{Book, StatusKind, StatusMessage},
    services::LibraryClient,
};

const STYLE: &str = "\
body{font-family:sans-serif;padding:1rem}\
.title{text-align:center;font-weight:bold;font-size:30px;padding:10px 0 30px}\
.fields{display:flex;gap:7rem;justify-content:center}\
.field{display:flex;flex-direction:column}\
.field label{font-weight:bold}\
.field input{border:1px solid black;border-radius:.5rem;height:2.5rem;padding:0 1rem}\
.actions{display:flex;justify-content:center;margin:1rem 0}\
.submit{background:black;color:white;width:130px;padding:.5rem 0;border-radius:.5rem}\
table{margin:100px auto 0;width:1200px;max-width:100%;border-collapse:collapse}\
th,td{text-align:left;padding:.75rem;border-bottom:1px solid #ddd}\
th{font-weight:bold}\
.row-actions form{display:inline}\
.edit{color:#2563eb}.delete{color:#dc2626}\
.toast{position:fixed;left:1.5rem;bottom:1.5rem;padding:.75rem 1rem;border-radius:.25rem;color:white;background:#323232}\
.toast.failure{background:#b91c1c}";

/// Render the whole page from the client's current state
pub fn library_page(library: &LibraryClient) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>My Book Library</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");
    html.push_str("<p class=\"title\">My Book Library</p>");

    book_form(&mut html, library.draft(), library.submit_label());

    if !library.books().is_empty() {
        book_table(&mut html, library.books());
    }

    if let Some(status) = library.status() {
        toast(&mut html, &status);
    }

    html.push_str("</body></html>");
    html
}

fn book_form(html: &mut String, draft: &Book, label: &str) {
    html.push_str("<form method=\"post\" action=\"/books\"><div class=\"fields\">");
    field(html, "book", "Book Title", &draft.title, "e.g Who ate my cheese", true);
    field(html, "author", "Author's Name", &draft.author, "e.g Spencer Johnson", true);
    field(html, "number", "ISBN(Optional)", &draft.isbn, "e.g 0-399-14444-59A", false);
    html.push_str(&format!(
        "</div><div class=\"actions\"><button type=\"submit\" class=\"submit\">{}</button></div></form>",
        label
    ));
}

fn field(html: &mut String, name: &str, label: &str, value: &str, placeholder: &str, required: bool) {
    html.push_str(&format!(
        "<div class=\"field\"><label for=\"{name}\">{label}</label>\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"{required}></div>",
        name = name,
        label = escape(label),
        value = escape(value),
        placeholder = escape(placeholder),
        required = if required { " required" } else { "" },
    ));
}

fn book_table(html: &mut String, books: &[Book]) {
    html.push_str(
        "<table><thead><tr><th>Book Title</th><th>Author's name</th><th>ISBN</th><th>Actions</th></tr></thead><tbody>",
    );
    for (index, book) in books.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"row-actions\">\
             <form method=\"post\" action=\"/books/{index}/edit\"><button type=\"submit\" class=\"edit\" title=\"Edit\">Edit</button></form> \
             <form method=\"post\" action=\"/books/{index}/delete\"><button type=\"submit\" class=\"delete\" title=\"Delete\">Delete</button></form>\
             </td></tr>",
            escape(&book.title),
            escape(&book.author),
            escape(&book.isbn),
            index = index,
        ));
    }
    html.push_str("</tbody></table>");
}

fn toast(html: &mut String, status: &StatusMessage) {
    let class = match status.kind {
        StatusKind::Success => "toast",
        StatusKind::Failure => "toast failure",
    };
    html.push_str(&format!(
        "<div class=\"{}\" role=\"status\">{} \
         <form method=\"post\" action=\"/status/dismiss\" style=\"display:inline\"><button type=\"submit\" title=\"Close\">&times;</button></form></div>",
        class,
        escape(&status.text)
    ));
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
