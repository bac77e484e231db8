//! Built-in document stylesheet.

/// Stylesheet applied to documents rendered without caller-supplied CSS.
pub const DEFAULT_CSS: &str = r"body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
}
h1 {
    color: #2c3e50;
    font-size: 32px;
    margin-bottom: 20px;
    border-bottom: 2px solid #eee;
    padding-bottom: 10px;
}
h2 {
    color: #34495e;
    font-size: 24px;
    margin-top: 20px;
    margin-bottom: 15px;
}
h3 {
    color: #445566;
    font-size: 20px;
    margin-top: 15px;
}
p {
    margin-bottom: 15px;
    color: #333;
}
ul, ol {
    margin-bottom: 15px;
    padding-left: 25px;
}
li {
    margin-bottom: 5px;
}
code {
    background-color: #f7f9fa;
    padding: 2px 5px;
    border-radius: 3px;
    font-family: monospace;
}
pre {
    background-color: #f7f9fa;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
}
blockquote {
    border-left: 4px solid #ccc;
    margin: 15px 0;
    padding-left: 15px;
    font-style: italic;
    color: #666;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin-bottom: 15px;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
th {
    background-color: #f5f5f5;
}
";
