// src/report/template.rs
// Fixed page chrome for the report. Only the data rows are generated.

pub const TITLE: &str = "Relatório de Patentes";
pub const SEARCH_PLACEHOLDER: &str = "Busque por Arquivo, CNPJ ou Resultado...";
pub const NO_RESULTS: &str = "Nenhum resultado encontrado.";
pub const TAX_ID_PLACEHOLDER: &str = "N/D";

pub const DETAIL_HEADERS: [&str; 4] = ["NÚMERO DO PEDIDO", "Data do Depósito", "Título", "IPC"];

pub const STYLE: &str = r#"<style>
    body {
        font-family: Arial, sans-serif;
        background-color: #f8f9fa;
        color: #333;
        margin: 0;
        padding: 20px;
    }
    .container {
        max-width: 800px;
        margin: auto;
        background: #fff;
        padding: 20px;
        border-radius: 10px;
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
    }
    h1 {
        text-align: center;
        color: #000000;
        margin-bottom: 25px;
    }
    .search-bar {
        width: 100%;
        padding: 10px;
        margin-bottom: 20px;
        border: 1px solid #ddd;
        border-radius: 5px;
        font-size: 16px;
        box-sizing: border-box;
    }
    .file-item {
        margin: 10px 0;
        border: 1px solid #ddd;
        border-radius: 5px;
        padding: 10px;
        background-color: #f9f9f9;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .file-item.expandable {
        cursor: pointer;
    }
    .file-item:hover {
        background-color: #e9ecef;
    }
    .dropdown-icon {
        font-size: 16px;
        color: #0074D9;
        transition: transform 0.3s;
    }
    .dropdown-icon.up {
        transform: rotate(180deg);
    }
    .dropdown-content {
        display: none;
        margin-top: 10px;
        padding-left: 20px;
    }
    .dropdown-content.open {
        display: block;
    }
    .dropdown-content table {
        width: 100%;
        border-collapse: collapse;
        margin: 10px 0;
    }
    .dropdown-content th, .dropdown-content td {
        border: 1px solid #ddd;
        padding: 8px;
        text-align: left;
    }
    .dropdown-content th {
        background-color: #0074D9;
        color: white;
    }
    .dropdown-content tr:nth-child(even) {
        background-color: #f2f2f2;
    }
    .hidden {
        display: none !important;
    }
    #no-results {
        display: none;
        text-align: center;
        color: #999;
    }
</style>"#;

pub const SCRIPT: &str = r#"<script>
    function toggleDropdown(id, iconId) {
        const dropdown = document.getElementById(id);
        const icon = document.getElementById(iconId);
        const open = dropdown.classList.toggle("open");
        icon.classList.toggle("up", open);
    }

    function filterResults() {
        const query = document.getElementById("search-bar").value.toLowerCase();
        const items = document.getElementsByClassName("file-item");
        let found = false;
        for (const item of items) {
            const matches = item.textContent.toLowerCase().includes(query);
            item.classList.toggle("hidden", !matches);
            const details = item.dataset.details ? document.getElementById(item.dataset.details) : null;
            if (details) {
                details.classList.toggle("hidden", !matches);
            }
            found = found || matches;
        }
        const empty = query.length > 0 && !found;
        document.getElementById("no-results").style.display = empty ? "block" : "none";
    }
</script>"#;
