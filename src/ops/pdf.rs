//! # lopdf PDF 库边界
//!
//! 提供四个原子能力：读取、按页抽取、追加合并、压缩保存。
//! 页索引在本模块内从零开始；lopdf 自身的页号从 1 开始。
//!
//! ## 实现要点
//! - 抽取与合并通过"页对象图深拷贝"实现：把页字典及其引用的
//!   资源递归克隆到目标文档，再挂到目标页树上
//! - `/Parent` 反向引用在克隆时跳过，由挂树一步重新设置
//! - 压缩即 lopdf 的流压缩后重新序列化
//!
//! ## 依赖关系
//! - 被 `actions/` 模块使用
//! - 使用 `lopdf` crate

use crate::error::{PdfifyError, Result};

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

/// 读取一个 PDF 文件
pub fn load(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|e| PdfifyError::PdfError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// 文档页数
pub fn page_count(doc: &Document) -> usize {
    doc.get_pages().len()
}

/// 创建只含空页树的新文档，作为抽取/合并的目标
pub fn empty_document() -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Kids", Object::Array(Vec::new()));
    pages.set("Count", Object::Integer(0));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

/// 按零基页索引把若干页抽取为一个新文档
///
/// 索引顺序决定输出页序；重复索引产出重复页。
pub fn extract_pages(doc: &Document, pages: &[usize], context: &Path) -> Result<Document> {
    let page_map = doc.get_pages();
    let mut out = empty_document();

    for &page in pages {
        let key = page as u32 + 1;
        let page_id = *page_map.get(&key).ok_or_else(|| PdfifyError::PdfError {
            path: context.display().to_string(),
            reason: format!("page {} out of range ({} pages)", page + 1, page_map.len()),
        })?;
        clone_page_into(doc, &mut out, page_id).map_err(|reason| PdfifyError::PdfError {
            path: context.display().to_string(),
            reason,
        })?;
    }

    Ok(out)
}

/// 把 `source` 的全部页按原顺序追加到 `target` 末尾
pub fn append_document(target: &mut Document, source: &Document, context: &Path) -> Result<()> {
    // BTreeMap 保证页号升序
    for (_, page_id) in source.get_pages() {
        clone_page_into(source, target, page_id).map_err(|reason| PdfifyError::PdfError {
            path: context.display().to_string(),
            reason,
        })?;
    }
    Ok(())
}

/// 压缩流并写出到指定路径
pub fn save_compressed(doc: &mut Document, path: &Path) -> Result<()> {
    doc.compress();
    doc.save(path).map_err(|e| PdfifyError::PdfError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// 不压缩直接写出
pub fn save(doc: &mut Document, path: &Path) -> Result<()> {
    doc.save(path).map_err(|e| PdfifyError::PdfError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// 读取 -> 压缩 -> 写出 `output_dir/compressed_<原文件名>`
pub fn compress_file(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let mut doc = load(input)?;

    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PdfifyError::InvalidArgument(format!("bad input path: {}", input.display())))?;
    let output = output_dir.join(format!("compressed_{}", name));

    save_compressed(&mut doc, &output)?;
    Ok(output)
}

// ─────────────────────────────────────────────────────────────
// 页对象图克隆
// ─────────────────────────────────────────────────────────────

/// 把 `source` 的一页（及其引用的资源）克隆到 `target` 并追加为最后一页
fn clone_page_into(
    source: &Document,
    target: &mut Document,
    page_id: ObjectId,
) -> std::result::Result<(), String> {
    let page_object = source
        .get_object(page_id)
        .map_err(|e| format!("cannot read page object {:?}: {}", page_id, e))?;

    let cloned = deep_clone_object(source, target, page_object);
    let cloned_id = target.add_object(cloned);

    // 目标文档的页树根
    let pages_id = {
        let catalog = target.catalog().map_err(|e| format!("no catalog: {}", e))?;
        match catalog.get(b"Pages") {
            Ok(Object::Reference(id)) => *id,
            Ok(_) => return Err("/Pages is not a reference".to_string()),
            Err(e) => return Err(format!("no /Pages: {}", e)),
        }
    };

    // 挂到 /Kids 并更新 /Count
    if let Ok(Object::Dictionary(pages_dict)) = target.get_object_mut(pages_id) {
        if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
            kids.push(Object::Reference(cloned_id));
        }
        if let Ok(Object::Integer(count)) = pages_dict.get_mut(b"Count") {
            *count += 1;
        }
    }

    // 重设克隆页的 /Parent
    if let Ok(Object::Dictionary(page_dict)) = target.get_object_mut(cloned_id) {
        page_dict.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}

/// 递归克隆一个 lopdf 对象，解引用时把被引用对象一并克隆
///
/// `/Parent` 被跳过以避免沿页树回环，由 `clone_page_into` 重新设置。
/// 无法解析的引用降级为 Null，不中断整页克隆。
fn deep_clone_object(source: &Document, target: &mut Document, object: &Object) -> Object {
    match object {
        Object::Dictionary(dict) => {
            Object::Dictionary(clone_dictionary(source, target, dict))
        }
        Object::Array(array) => Object::Array(
            array
                .iter()
                .map(|item| deep_clone_object(source, target, item))
                .collect(),
        ),
        Object::Reference(ref_id) => match source.get_object(*ref_id) {
            Ok(referenced) => {
                let cloned = deep_clone_object(source, target, referenced);
                let new_id = target.add_object(cloned);
                Object::Reference(new_id)
            }
            Err(_) => Object::Null,
        },
        Object::Stream(stream) => {
            let dict = clone_dictionary(source, target, &stream.dict);
            Object::Stream(lopdf::Stream::new(dict, stream.content.clone()))
        }
        // 其余标量类型直接克隆
        other => other.clone(),
    }
}

/// 克隆字典的全部键值，跳过 `/Parent`
fn clone_dictionary(source: &Document, target: &mut Document, dict: &Dictionary) -> Dictionary {
    let mut out = Dictionary::new();
    for (key, value) in dict.iter() {
        if key == b"Parent" {
            continue;
        }
        out.set(key.clone(), deep_clone_object(source, target, value));
    }
    out
}
